//! Session and agent profile routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use parley::AgentKind;

use super::{domain_error, ApiError};
use crate::config::SessionProfile;
use crate::models::AgentResponse;
use crate::AppState;

/// Provider chain resolved at startup
pub async fn get_session(State(state): State<AppState>) -> Json<SessionProfile> {
    Json(state.session.as_ref().clone())
}

/// Instructions and greeting for one agent
pub async fn get_agent(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<AgentResponse>, ApiError> {
    let kind: AgentKind = kind
        .parse()
        .map_err(|_| (StatusCode::NOT_FOUND, format!("Unknown agent: {}", kind)))?;

    // Wellness instructions carry the reminder of the previous check-in
    let instructions = match kind {
        AgentKind::Wellness => state.wellness.instructions().await.map_err(domain_error)?,
        _ => kind.instructions().to_string(),
    };

    Ok(Json(AgentResponse {
        kind,
        greeting: kind.greeting().to_string(),
        instructions,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", get(get_session))
        .route("/agents/:kind", get(get_agent))
}
