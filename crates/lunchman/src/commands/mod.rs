//! `lunchman` subcommands.
//!
//! Commands talk to the operator through an [`Actor`] and to the store
//! through the capability traits, so tests can run them against in-memory
//! collections and scripted input.

use std::fmt::Display;
use std::io::{BufRead, Write};

use thiserror::Error;

use luncher_db::RepositoryError;

use crate::interact::{Actor, ActorError};

pub mod region;
pub mod restaurant;

/// Printed when a restaurant was stored but its administrator was not.
pub const PARTIAL_INSERT_WARNING: &str = "Failed to enter the new user to the DB while the restaurant was already inserted. Make sure to check the DB for consistency!";

/// Errors that end a command with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The dialogue with the operator failed or was canceled.
    #[error(transparent)]
    Actor(#[from] ActorError),

    /// Reading or writing the store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The operator declined the final confirmation.
    #[error("Aborted")]
    Aborted,

    /// The restaurant was stored but its user was not.
    #[error("{0}\n{PARTIAL_INSERT_WARNING}")]
    UserInsert(#[source] RepositoryError),
}

/// Show what is about to be stored and ask the operator to confirm.
///
/// # Errors
///
/// Returns `CommandError::Aborted` if the operator declines.
pub fn confirm_insertion<R, W>(
    actor: &mut Actor<R, W>,
    document: &impl Display,
) -> Result<(), CommandError>
where
    R: BufRead + Send,
    W: Write + Send,
{
    let question = format!(
        "Going to enter the following into the DB:\n{document}\nAre you sure you want to continue?"
    );
    if actor.confirm(&question, true)? {
        Ok(())
    } else {
        Err(CommandError::Aborted)
    }
}
