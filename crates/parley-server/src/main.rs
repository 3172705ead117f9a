use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{GeminiProvider, JsonCheckInRepository, JsonProgressRepository};
use application::{ImprovService, TutorService, WellnessService};
use config::{SessionProfile, Settings};
use parley::LlmProvider;

const DEFAULT_LOG_FILTER: &str = "parley_server=info,tower_http=info";

/// Type aliases for application services with concrete repository implementations
pub type AppWellnessService = WellnessService<JsonCheckInRepository>;
pub type AppTutorService = TutorService<JsonProgressRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionProfile>,
    pub api_key: Option<Arc<str>>,
    pub improv: Arc<ImprovService>,
    pub wellness: Arc<AppWellnessService>,
    pub tutor: Arc<AppTutorService>,
}

impl AppState {
    pub fn new(settings: &Settings, llm: Option<Arc<dyn LlmProvider>>) -> Self {
        let session = SessionProfile::resolve(settings);
        let checkins = Arc::new(JsonCheckInRepository::new(settings.checkin_log_path()));
        let progress = Arc::new(JsonProgressRepository::new(settings.progress_log_path()));

        Self {
            improv: Arc::new(ImprovService::new(llm, session.default_persona.clone())),
            wellness: Arc::new(WellnessService::new(checkins)),
            tutor: Arc::new(TutorService::new(progress)),
            api_key: settings.api_key.as_deref().map(Arc::from),
            session: Arc::new(session),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Parley API is running - yes, and...".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router. `/health` stays public; everything else sits behind auth.
pub fn app(state: AppState) -> Router {
    let protected_routes = Router::new()
        .merge(routes::agents::router())
        .merge(routes::improv::router())
        .merge(routes::wellness::router())
        .merge(routes::tutor::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn init_llm(settings: &Settings) -> Option<Arc<dyn LlmProvider>> {
    let Some(api_key) = settings.google_api_key.as_deref() else {
        tracing::warn!("⚠️  No GOOGLE_API_KEY set - improv replies use the fallback responder");
        return None;
    };

    match GeminiProvider::new(api_key, settings.llm_model.as_str()) {
        Ok(provider) => {
            tracing::info!("🤖 LLM provider initialized (Gemini {})", settings.llm_model);
            Some(Arc::new(provider))
        }
        Err(e) => {
            tracing::warn!("⚠️  Failed to initialize Gemini: {}", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("🎭 Parley API initializing...");

    let settings = Settings::from_env();

    if settings.api_key.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No PARLEY_API_KEY set - authentication disabled");
    }

    let state = AppState::new(&settings, init_llm(&settings));
    tracing::info!(
        "🔊 Session: stt={} llm={} tts={:?} audio_filter={}",
        state.session.stt_model,
        state.session.llm_model,
        state.session.tts,
        state.session.audio_filter
    );
    tracing::info!("📝 Logs in {}", settings.data_dir.display());

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("✅ Parley API listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
