//! Core types for Luncher.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod location;
pub mod price;

pub use id::*;
pub use location::{Location, LocationError, RESERVED_LOCATION};
pub use price::Price;
