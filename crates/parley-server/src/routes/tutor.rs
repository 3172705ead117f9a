//! Tutor Routes - Concept catalogue and progress log

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use parley::{Concept, ConceptMastery, TutorProgress};

use super::{domain_error, ApiError};
use crate::models::{InstructionsQuery, InstructionsResponse, ProgressQuery, RecordProgressRequest};
use crate::AppState;

pub async fn list_concepts(State(state): State<AppState>) -> Json<&'static [Concept]> {
    Json(state.tutor.concepts())
}

pub async fn record_progress(
    State(state): State<AppState>,
    Json(payload): Json<RecordProgressRequest>,
) -> Result<(StatusCode, Json<TutorProgress>), ApiError> {
    let mode = payload.mode().map_err(domain_error)?;
    let score = payload.score().map_err(domain_error)?;

    let record = state
        .tutor
        .record(&payload.concept_id, mode, score, payload.feedback)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<Vec<TutorProgress>>, ApiError> {
    let records = state
        .tutor
        .progress(query.concept.as_deref())
        .await
        .map_err(domain_error)?;
    Ok(Json(records))
}

pub async fn get_mastery(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConceptMastery>>, ApiError> {
    let summary = state.tutor.mastery().await.map_err(domain_error)?;
    Ok(Json(summary))
}

pub async fn get_instructions(
    State(state): State<AppState>,
    Query(query): Query<InstructionsQuery>,
) -> Result<Json<InstructionsResponse>, ApiError> {
    let mode = query.mode().map_err(domain_error)?;
    let concept = state.tutor.concept(&query.concept).map_err(domain_error)?;
    let instructions = state
        .tutor
        .instructions(mode, concept.id)
        .map_err(domain_error)?;

    Ok(Json(InstructionsResponse {
        mode,
        concept_id: concept.id.to_string(),
        instructions,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tutor/concepts", get(list_concepts))
        .route(
            "/tutor/progress",
            get(list_progress).post(record_progress),
        )
        .route("/tutor/mastery", get(get_mastery))
        .route("/tutor/instructions", get(get_instructions))
}
