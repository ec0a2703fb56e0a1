//! Offer document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{OfferId, Price};

/// Errors from validating an [`Offer`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OfferError {
    /// The offer ends before it starts.
    #[error("offer ends ({to}) before it starts ({from})")]
    InvertedInterval {
        /// Start of the offer.
        from: DateTime<Utc>,
        /// End of the offer.
        to: DateTime<Utc>,
    },
}

/// A time-bounded lunch deal posted by a restaurant.
///
/// The offer is valid on the half-open interval `[from_time, to_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Store-generated ID, `None` until inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OfferId>,
    /// Denormalized restaurant data.
    pub restaurant: OfferRestaurant,
    /// Short title.
    pub title: String,
    /// Start of the offer.
    pub from_time: DateTime<Utc>,
    /// End of the offer.
    pub to_time: DateTime<Utc>,
    /// Free-form description.
    pub description: String,
    /// Price in minor units.
    pub price: Price,
    /// Tag names.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Restaurant fields copied into every offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRestaurant {
    /// Restaurant name.
    pub name: String,
}

impl Offer {
    /// Check the offer's invariants.
    ///
    /// # Errors
    ///
    /// Returns `OfferError::InvertedInterval` if `from_time` is after `to_time`.
    pub fn validate(&self) -> Result<(), OfferError> {
        if self.from_time > self.to_time {
            return Err(OfferError::InvertedInterval {
                from: self.from_time,
                to: self.to_time,
            });
        }
        Ok(())
    }

    /// Whether `[from_time, to_time)` intersects `[start, end)`.
    #[must_use]
    pub fn intersects(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.from_time < end && self.to_time > start
    }
}
