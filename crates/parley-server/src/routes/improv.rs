//! Improv Routes
//!
//! Stateless per-turn operations. `/improv/respond` is the only one that may
//! reach the language model.

use axum::{extract::State, routing::post, Json, Router};

use parley::{classify_energy, EnergyReading, PromptRequest};

use super::{domain_error, ApiError};
use crate::application::ImprovReply;
use crate::models::{
    EnergyRequest, FallbackRequest, FallbackResponse, PromptBody, PromptResponse, RespondRequest,
};
use crate::AppState;

pub async fn classify(Json(payload): Json<EnergyRequest>) -> Json<EnergyReading> {
    Json(classify_energy(&payload.text))
}

pub async fn build_prompt(
    State(state): State<AppState>,
    Json(payload): Json<PromptBody>,
) -> Result<Json<PromptResponse>, ApiError> {
    let request = match payload.energy {
        Some(energy) => {
            let energy = energy.into_reading().map_err(domain_error)?;
            PromptRequest::with_energy(
                payload.transcript,
                energy,
                state.improv.persona(payload.persona),
            )
        }
        None => state.improv.prepare(&payload.transcript, payload.persona),
    };

    Ok(Json(PromptResponse {
        prompt: request.render(),
        energy: request.energy,
        persona: request.persona,
    }))
}

pub async fn fallback(
    State(state): State<AppState>,
    Json(payload): Json<FallbackRequest>,
) -> Json<FallbackResponse> {
    Json(FallbackResponse {
        reply: state.improv.fallback(&payload.text),
    })
}

pub async fn respond(
    State(state): State<AppState>,
    Json(payload): Json<RespondRequest>,
) -> Json<ImprovReply> {
    Json(
        state
            .improv
            .respond(&payload.transcript, payload.persona)
            .await,
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/improv/energy", post(classify))
        .route("/improv/prompt", post(build_prompt))
        .route("/improv/fallback", post(fallback))
        .route("/improv/respond", post(respond))
}
