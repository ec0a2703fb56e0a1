//! Luncher API library.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health            - Liveness check
//! GET  /health/ready      - Readiness check (store ping)
//! GET  /api/v1/offers     - Offers for the current UTC day
//! POST /api/v1/offers     - Post an offer (requires a logged-in user)
//! ```
//!
//! The session layer is not part of [`app`]; the binary adds a
//! `PostgreSQL`-backed one and tests add an in-memory one.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Session key holding the ID the social-login flow stored for a user.
pub const USER_SESSION_KEY: &str = "user_session_id";

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
