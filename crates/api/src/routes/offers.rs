//! Offer routes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::{DateTime, Days, NaiveTime, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use luncher_core::{Offer, OfferRestaurant, Price, User};

use crate::USER_SESSION_KEY;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Body of `POST /api/v1/offers`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOffer {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub tags: Vec<String>,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
}

/// `[00:00, next 00:00)` of the UTC day containing `now`.
fn day_bounds(now: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let end = start
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::Internal("date out of range".to_owned()))?;
    Ok((start, end))
}

/// Offers valid at any point of the current UTC day.
///
/// # Errors
///
/// Returns `AppError::Database` if the offers cannot be read.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Offer>>> {
    let (start, end) = day_bounds(Utc::now())?;
    let offers = state.offers.get_for_time_range(start, end).await?;
    Ok(Json(offers))
}

/// The user the request's session belongs to.
async fn current_user(state: &AppState, session: &Session) -> Result<User> {
    let session_id: Option<String> = session
        .get(USER_SESSION_KEY)
        .await
        .map_err(|e| AppError::Internal(format!("session store: {e}")))?;
    let session_id = session_id.ok_or_else(|| AppError::Forbidden("not logged in".to_owned()))?;

    match state.users.get_by_session_id(&session_id).await {
        Ok(user) => Ok(user),
        Err(e) if e.is_not_found() => Err(AppError::Forbidden("not logged in".to_owned())),
        Err(e) => Err(e.into()),
    }
}

/// Post an offer on behalf of the logged-in user's restaurant.
///
/// # Errors
///
/// Returns `AppError::Forbidden` without a logged-in user and
/// `AppError::BadRequest` if the offer ends before it starts.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<NewOffer>,
) -> Result<(StatusCode, Json<Offer>)> {
    let user = current_user(&state, &session).await?;
    let restaurant = state.restaurants.get_by_id(user.restaurant_id).await?;

    let offer = Offer {
        id: None,
        restaurant: OfferRestaurant {
            name: restaurant.name,
        },
        title: input.title,
        from_time: input.from_time,
        to_time: input.to_time,
        description: input.description,
        price: input.price,
        tags: input.tags,
    };
    offer
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let offer = state.offers.insert(offer).await?;
    tracing::info!(
        offer_id = ?offer.id,
        restaurant = %offer.restaurant.name,
        "Offer posted"
    );
    Ok((StatusCode::CREATED, Json(offer)))
}
