//! Restaurant document.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::RestaurantId;

/// A restaurant posting lunch offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Store-generated ID, `None` until inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RestaurantId>,
    /// Unique restaurant name.
    pub name: String,
    /// Street address.
    pub address: String,
}

impl Restaurant {
    /// Create a restaurant that has not been stored yet.
    #[must_use]
    pub const fn new(name: String, address: String) -> Self {
        Self {
            id: None,
            name,
            address,
        }
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant")?;
        writeln!(f, "  name:    {}", self.name)?;
        write!(f, "  address: {}", self.address)
    }
}
