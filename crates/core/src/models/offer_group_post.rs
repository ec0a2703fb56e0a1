//! Offer group post document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{OfferGroupPostId, RestaurantId};

/// A single social-network post announcing all of a restaurant's offers for
/// one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferGroupPost {
    /// Store-generated ID, `None` until inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OfferGroupPostId>,
    /// Restaurant the post belongs to.
    pub restaurant_id: RestaurantId,
    /// Day the post covers.
    pub date: NaiveDate,
    /// Template the post message is rendered from.
    pub message_template: String,
    /// ID of the published post, once published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_post_id: Option<String>,
}
