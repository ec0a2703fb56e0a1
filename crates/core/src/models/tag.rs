//! Tag document.

use serde::{Deserialize, Serialize};

use crate::types::TagId;

/// A label offers can be filtered by (e.g., `soup`, `vegan`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Store-generated ID, `None` until inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TagId>,
    /// Unique machine name referenced from offers.
    pub name: String,
    /// Human readable name.
    pub display_name: String,
}
