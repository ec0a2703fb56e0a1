//! Offer price in the smallest currency unit.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price, stored as an integer count of the smallest currency unit
/// (e.g., cents).
///
/// Serialized as a bare integer, matching the `price` field of an offer
/// document.
///
/// ```
/// use luncher_core::Price;
///
/// let price = Price::new(450);
/// assert_eq!(price.minor_units(), 450);
/// assert_eq!(price.to_string(), "4.50");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a new price from minor units.
    #[must_use]
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Price {
    fn from(minor_units: i64) -> Self {
        Self(minor_units)
    }
}
