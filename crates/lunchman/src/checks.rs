//! Input checks used by the `add` commands.

use async_trait::async_trait;

use luncher_core::{Location, RESERVED_LOCATION};
use luncher_db::{Regions, Restaurants};

use crate::interact::{CheckError, InputCheck};

/// Rejects empty input.
pub struct NotEmpty;

#[async_trait]
impl InputCheck for NotEmpty {
    async fn check(&self, input: &str) -> Result<(), CheckError> {
        if input.is_empty() {
            return Err(CheckError::invalid("Can't be empty!"));
        }
        Ok(())
    }
}

/// Rejects input containing whitespace.
pub struct SingleToken;

#[async_trait]
impl InputCheck for SingleToken {
    async fn check(&self, input: &str) -> Result<(), CheckError> {
        if input.contains(char::is_whitespace) {
            return Err(CheckError::invalid("Expecting a single argument"));
        }
        Ok(())
    }
}

/// Rejects the reserved `Local` name.
pub struct NotReserved;

#[async_trait]
impl InputCheck for NotReserved {
    async fn check(&self, input: &str) -> Result<(), CheckError> {
        if input == RESERVED_LOCATION {
            return Err(CheckError::invalid(format!(
                "Can't use region '{RESERVED_LOCATION}'!"
            )));
        }
        Ok(())
    }
}

/// Accepts IANA time zone names other than `Local`.
pub struct ValidLocation;

#[async_trait]
impl InputCheck for ValidLocation {
    async fn check(&self, input: &str) -> Result<(), CheckError> {
        Location::parse(input)
            .map(|_| ())
            .map_err(|e| CheckError::invalid(e.to_string()))
    }
}

/// Rejects names of existing regions.
pub struct RegionNameUnique<'a>(pub &'a dyn Regions);

#[async_trait]
impl InputCheck for RegionNameUnique<'_> {
    async fn check(&self, input: &str) -> Result<(), CheckError> {
        match self.0.get(input).await {
            Ok(_) => Err(CheckError::invalid(
                "A region with the same name already exists!",
            )),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Rejects names of existing restaurants.
pub struct RestaurantNameUnique<'a>(pub &'a dyn Restaurants);

#[async_trait]
impl InputCheck for RestaurantNameUnique<'_> {
    async fn check(&self, input: &str) -> Result<(), CheckError> {
        if self.0.exists(input).await? {
            return Err(CheckError::invalid(
                "A restaurant with the same name already exists!",
            ));
        }
        Ok(())
    }
}
