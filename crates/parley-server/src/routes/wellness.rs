//! Wellness check-in routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use parley::WellnessCheckIn;

use super::{domain_error, ApiError};
use crate::models::{CheckInQuery, CreateCheckInRequest, WellnessContextResponse};
use crate::AppState;

pub async fn create_checkin(
    State(state): State<AppState>,
    Json(payload): Json<CreateCheckInRequest>,
) -> Result<(StatusCode, Json<WellnessCheckIn>), ApiError> {
    let entry = state
        .wellness
        .record(
            payload.mood,
            payload.energy_level,
            payload.objectives,
            payload.stress_factors,
        )
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Check-ins oldest first, optionally for one date and/or the last `limit`
pub async fn list_checkins(
    State(state): State<AppState>,
    Query(query): Query<CheckInQuery>,
) -> Result<Json<Vec<WellnessCheckIn>>, ApiError> {
    let entries = match query.date.as_deref() {
        Some(date) => {
            let mut entries = state.wellness.on_date(date).await.map_err(domain_error)?;
            if let Some(limit) = query.limit {
                entries.drain(..entries.len().saturating_sub(limit));
            }
            entries
        }
        None => state
            .wellness
            .recent(query.limit)
            .await
            .map_err(domain_error)?,
    };

    Ok(Json(entries))
}

pub async fn latest_checkin(
    State(state): State<AppState>,
) -> Result<Json<WellnessCheckIn>, ApiError> {
    state
        .wellness
        .latest()
        .await
        .map_err(domain_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "No check-ins recorded yet".to_string()))
}

pub async fn get_context(
    State(state): State<AppState>,
) -> Result<Json<WellnessContextResponse>, ApiError> {
    let context = state.wellness.context().await.map_err(domain_error)?;
    let instructions = state.wellness.instructions().await.map_err(domain_error)?;

    Ok(Json(WellnessContextResponse {
        context,
        instructions,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/wellness/checkins",
            get(list_checkins).post(create_checkin),
        )
        .route("/wellness/checkins/latest", get(latest_checkin))
        .route("/wellness/context", get(get_context))
}
