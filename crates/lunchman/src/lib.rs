//! Lunchman library.
//!
//! Operator dialogue ([`interact`]), input checks ([`checks`]) and the
//! subcommands built from them ([`commands`]).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checks;
pub mod commands;
pub mod interact;
