//! HTTP route handlers.

pub mod health;
pub mod offers;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Every route, without state.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/api/v1/offers", get(offers::list).post(offers::create))
}
