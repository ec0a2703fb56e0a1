//! Region location as an IANA time zone.

use core::fmt;
use core::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Time zone name that can never be used for a region.
///
/// `Local` would resolve to whatever zone the serving host runs in.
pub const RESERVED_LOCATION: &str = "Local";

/// Errors that can occur when parsing a [`Location`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The input string is empty.
    #[error("location cannot be empty")]
    Empty,
    /// The input is the reserved `Local` zone.
    #[error("Can't use region 'Local'!")]
    Reserved,
    /// The input is not a known IANA time zone.
    #[error("unknown time zone: {0}")]
    Unknown(String),
}

/// An IANA time zone a region is bound to (e.g., `Europe/Tallinn`).
///
/// ## Examples
///
/// ```
/// use luncher_core::Location;
///
/// assert!(Location::parse("Europe/Tallinn").is_ok());
/// assert!(Location::parse("Local").is_err());
/// assert!(Location::parse("Mars/Olympus_Mons").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(Tz);

impl Location {
    /// Parse a `Location` from an IANA time zone name.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is the reserved `Local` zone,
    /// or is not a known time zone name.
    pub fn parse(s: &str) -> Result<Self, LocationError> {
        if s.is_empty() {
            return Err(LocationError::Empty);
        }

        if s == RESERVED_LOCATION {
            return Err(LocationError::Reserved);
        }

        s.parse::<Tz>()
            .map(Self)
            .map_err(|_| LocationError::Unknown(s.to_owned()))
    }

    /// Returns the canonical time zone name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }

    /// Returns the time zone for date arithmetic.
    #[must_use]
    pub const fn time_zone(&self) -> Tz {
        self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Location {
    type Error = LocationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.as_str().to_owned()
    }
}
