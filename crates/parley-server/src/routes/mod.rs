//! Parley API Routes
//!
//! - /session - Resolved provider chain
//! - /agents/:kind - Agent instructions and greeting
//! - /improv/* - Energy, prompt, fallback and reply generation
//! - /wellness/* - Check-in log
//! - /tutor/* - Concept catalogue and progress log

use axum::http::StatusCode;

use parley::DomainError;

pub mod agents;
pub mod improv;
pub mod tutor;
pub mod wellness;

pub type ApiError = (StatusCode, String);

/// Map a domain error onto an HTTP status
pub fn domain_error(err: DomainError) -> ApiError {
    let status = match &err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Repository(_) | DomainError::ExternalService(_) => {
            tracing::error!("Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Settings;
    use crate::{app, AppState};

    fn test_app(dir: &tempfile::TempDir, api_key: Option<&str>) -> Router {
        let mut settings = Settings::from_lookup(|_| None);
        settings.data_dir = dir.path().to_path_buf();
        settings.api_key = api_key.map(str::to_string);
        app(AppState::new(&settings, None))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        });
        (status, value)
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, Some("secret"));

        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, _) = send(&app, "GET", "/session", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bearer_token_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, Some("secret"));

        let request = Request::builder()
            .uri("/session")
            .header(header::AUTHORIZATION, "Bearer secret")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_session_profile() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (status, body) = send(&app, "GET", "/session", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tts"]["provider"], "google");
        assert_eq!(body["tts"]["voice"], "alloy");
        assert_eq!(body["llm_enabled"], false);
    }

    #[tokio::test]
    async fn test_energy_and_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (status, body) = send(
            &app,
            "POST",
            "/improv/energy",
            Some(json!({"text": "AMAZING!!!"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"level": "high", "score": 1.0}));

        let (status, body) = send(
            &app,
            "POST",
            "/improv/prompt",
            Some(json!({"transcript": "a cat walks in", "persona": "a pirate"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.starts_with("You are playing the role of: a pirate. "));
        assert!(prompt.contains("a cat walks in"));
        assert_eq!(body["energy"]["level"], "low");
    }

    #[tokio::test]
    async fn test_prompt_persona_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (status, body) = send(
            &app,
            "POST",
            "/improv/prompt",
            Some(json!({"transcript": "ahoy", "persona": "  a pirate  "})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persona"], "  a pirate  ");
        assert!(body["prompt"]
            .as_str()
            .unwrap()
            .starts_with("You are playing the role of:   a pirate  . "));
    }

    #[test]
    fn test_domain_error_status() {
        use parley::DomainError;

        let status = |e: DomainError| super::domain_error(e).0;
        assert_eq!(status(DomainError::validation("bad")), StatusCode::BAD_REQUEST);
        assert_eq!(status(DomainError::not_found("Concept", "x")), StatusCode::NOT_FOUND);
        assert_eq!(
            status(DomainError::Repository("disk".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status(DomainError::ExternalService("gemini".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_prompt_rejects_unknown_energy_level() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (status, body) = send(
            &app,
            "POST",
            "/improv/prompt",
            Some(json!({"transcript": "hi", "energy": {"level": "frantic", "score": 0.9}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.as_str().unwrap().contains("Unknown energy level"));
    }

    #[tokio::test]
    async fn test_respond_without_llm_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (status, body) = send(
            &app,
            "POST",
            "/improv/respond",
            Some(json!({"transcript": "the moon is cheese"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        let reply = body["reply"].as_str().unwrap().to_string();
        assert!(parley::FallbackResponder::new()
            .candidates("the moon is cheese")
            .contains(&reply));
    }

    #[tokio::test]
    async fn test_empty_fallback_invitation() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (status, body) = send(&app, "POST", "/improv/fallback", Some(json!({"text": ""}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["reply"],
            parley::FallbackResponder::new().reply_at("", 0)
        );
    }

    #[tokio::test]
    async fn test_wellness_checkin_flow() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (status, _) = send(&app, "GET", "/wellness/checkins/latest", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            "POST",
            "/wellness/checkins",
            Some(json!({
                "mood": "energetic",
                "energy_level": "high",
                "objectives": "record demo video"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body["summary"],
            "Mood: energetic, Energy: high. Goals: record demo video"
        );
        assert!(body.get("stress_factors").is_none());

        let (status, body) = send(&app, "GET", "/wellness/checkins?limit=5", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (_, body) = send(&app, "GET", "/wellness/context", None).await;
        assert!(body["context"].as_str().unwrap().contains("energetic"));

        assert!(dir.path().join("wellness_log.json").exists());
    }

    #[tokio::test]
    async fn test_wellness_checkin_validation() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (status, _) = send(
            &app,
            "POST",
            "/wellness/checkins",
            Some(json!({"mood": "", "energy_level": "low", "objectives": "rest"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_tutor_flow() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (_, body) = send(&app, "GET", "/tutor/concepts", None).await;
        assert_eq!(body.as_array().unwrap().len(), 4);

        let (status, body) = send(
            &app,
            "POST",
            "/tutor/progress",
            Some(json!({"concept_id": "loops", "mode": "quiz", "score": 8})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["mode"], "quiz");

        let (status, _) = send(
            &app,
            "POST",
            "/tutor/progress",
            Some(json!({"concept_id": "loops", "score": 11})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, "GET", "/tutor/mastery", None).await;
        assert_eq!(body[0]["concept_id"], "loops");
        assert_eq!(body[0]["best_score"], 8);

        let (status, _) = send(&app, "GET", "/tutor/progress?concept=recursion", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            "GET",
            "/tutor/instructions?mode=teach_back&concept=functions",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "teach_back");
    }

    #[tokio::test]
    async fn test_agents() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, None);

        let (status, body) = send(&app, "GET", "/agents/improv", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "improv");
        assert_eq!(body["greeting"], parley::AgentKind::Improv.greeting());

        let (status, _) = send(&app, "GET", "/agents/sommelier", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
