//! Region document.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Location, RegionId};

/// A named, time-zone-bound grouping of restaurants and their offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Store-generated ID, `None` until inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RegionId>,
    /// Unique region name.
    pub name: String,
    /// IANA time zone the region's offers are scheduled in.
    pub location: Location,
}

impl Region {
    /// Create a region that has not been stored yet.
    #[must_use]
    pub const fn new(name: String, location: Location) -> Self {
        Self {
            id: None,
            name,
            location,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Region")?;
        writeln!(f, "  name:     {}", self.name)?;
        write!(f, "  location: {}", self.location)
    }
}
