//! Entity documents.
//!
//! Field names are part of the document shape shared with the serving API,
//! so every `serde` rename here is load-bearing.

pub mod offer;
pub mod offer_group_post;
pub mod region;
pub mod registration_access_token;
pub mod restaurant;
pub mod tag;
pub mod user;

pub use offer::{Offer, OfferError, OfferRestaurant};
pub use offer_group_post::OfferGroupPost;
pub use region::Region;
pub use registration_access_token::RegistrationAccessToken;
pub use restaurant::Restaurant;
pub use tag::Tag;
pub use user::{User, UserSession};
