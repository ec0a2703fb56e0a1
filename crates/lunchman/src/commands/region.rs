//! Region commands.
//!
//! # Usage
//!
//! ```bash
//! lunchman add region
//! lunchman list regions
//! ```

use std::io::{BufRead, Write};

use luncher_core::{Location, Region};
use luncher_db::Regions;

use super::{CommandError, confirm_insertion};
use crate::checks::{NotEmpty, NotReserved, RegionNameUnique, SingleToken, ValidLocation};
use crate::interact::{Actor, ActorError, CheckError};

/// Prompt for a new region and store it.
///
/// # Errors
///
/// Returns `CommandError::Actor` if the dialogue is canceled,
/// `CommandError::Aborted` if the insertion is declined and
/// `CommandError::Repository` if storing fails.
pub async fn add<R, W>(
    actor: &mut Actor<R, W>,
    regions: &dyn Regions,
) -> Result<Region, CommandError>
where
    R: BufRead + Send,
    W: Write + Send,
{
    let name = actor
        .get_input_and_retry(
            "Please enter a name for the new region",
            &[&NotEmpty, &SingleToken, &NotReserved, &RegionNameUnique(regions)],
        )
        .await?;
    let location = actor
        .get_input_and_retry(
            "Please enter the region's location (IANA tz)",
            &[&NotEmpty, &SingleToken, &ValidLocation],
        )
        .await?;
    let location = Location::parse(&location)
        .map_err(|e| ActorError::Check(CheckError::invalid(e.to_string())))?;

    let region = Region::new(name, location);
    confirm_insertion(actor, &region)?;

    let region = regions.insert(region).await?;
    tracing::info!(name = %region.name, location = %region.location, "Region added");
    actor.say("Region successfully added!")?;
    Ok(region)
}

/// Print every region as `name (location)`.
///
/// # Errors
///
/// Returns `CommandError::Repository` if listing fails.
pub async fn list<R, W>(actor: &mut Actor<R, W>, regions: &dyn Regions) -> Result<(), CommandError>
where
    R: BufRead + Send,
    W: Write + Send,
{
    for region in regions.list().await? {
        actor.say(&format!("{} ({})", region.name, region.location))?;
    }
    Ok(())
}
