//! Luncher Core - Shared types library.
//!
//! This crate provides common types used across all Luncher components:
//! - `db` - Typed collections over the document store
//! - `api` - Serving API for currently valid offers
//! - `lunchman` - Administrative command-line tool
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access, no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and locations
//! - [`models`] - Entity documents with their persisted field names

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
