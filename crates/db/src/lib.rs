//! Luncher DB - Typed collections over the document store.
//!
//! # Store
//!
//! `PostgreSQL` is used as a document store: every collection is a table of
//! JSONB documents keyed by a store-generated UUID. The schema is embedded
//! and applied by [`Client::connect`].
//!
//! ## Collections
//!
//! - `offers` - Time-bounded lunch offers
//! - `regions` - Named, time-zone-bound groupings
//! - `restaurants` - Restaurants posting offers
//! - `users` - Restaurant administrators
//! - `tags` - Offer labels
//! - `offer_group_posts` - Daily social-network posts
//! - `registration_access_tokens` - Registration invitations
//!
//! # Usage
//!
//! ```rust,ignore
//! use luncher_db::{Client, Config, Regions, RegionsCollection};
//!
//! let mut client = Client::new(Config::from_env()?);
//! client.connect().await?;
//!
//! let regions = RegionsCollection::new(&client)?;
//! if !regions.exists("Tallinn").await? {
//!     // ...
//! }
//!
//! client.disconnect().await;
//! ```
//!
//! Handlers and commands depend on the capability traits ([`Offers`],
//! [`Regions`], ...) rather than the concrete collections, so they can be
//! exercised against the in-memory implementations in [`memory`] (feature
//! `memory`).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
mod document;
pub mod error;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod offer_group_posts;
pub mod offers;
pub mod regions;
pub mod registration_access_tokens;
pub mod restaurants;
pub mod tags;
pub mod users;

pub use client::{Client, ClientError};
pub use config::{Config, ConfigError};
pub use error::RepositoryError;
pub use offer_group_posts::{OfferGroupPosts, OfferGroupPostsCollection};
pub use offers::{Offers, OffersCollection};
pub use regions::{Regions, RegionsCollection};
pub use registration_access_tokens::{RegistrationAccessTokens, RegistrationAccessTokensCollection};
pub use restaurants::{Restaurants, RestaurantsCollection};
pub use tags::{Tags, TagsCollection};
pub use users::{Users, UsersCollection};
