//! Parley API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// API Client for Parley
pub struct ParleyClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct EnergyResponse {
    pub level: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub energy: EnergyResponse,
    pub persona: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
    #[serde(default)]
    pub source: Option<String>,
    pub energy: Option<EnergyResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CheckInResponse {
    pub date: String,
    pub time: String,
    pub mood: String,
    pub energy_level: String,
    pub objectives: String,
    pub stress_factors: Option<String>,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCheckInRequest {
    pub mood: String,
    pub energy_level: String,
    pub objectives: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_factors: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConceptResponse {
    pub id: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct RecordProgressRequest {
    pub concept_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressResponse {
    pub date: String,
    pub time: String,
    pub concept_id: String,
    pub mode: String,
    pub score: Option<u8>,
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MasteryResponse {
    pub concept_id: String,
    pub attempts: usize,
    pub best_score: Option<u8>,
    pub average_score: Option<f64>,
    pub last_mode: String,
    pub last_practiced: String,
}

impl ParleyClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    /// Test connection: health check plus one authenticated call
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Ok(false);
        }
        let resp = self.authed(self.client.get(format!("{}/session", self.base_url))).send().await?;
        Ok(resp.status().is_success())
    }

    pub async fn classify(&self, text: &str) -> Result<EnergyResponse> {
        self.post("/improv/energy", &json!({ "text": text })).await
    }

    pub async fn prompt(
        &self,
        transcript: &str,
        persona: Option<&str>,
        energy: Option<(&str, f64)>,
    ) -> Result<PromptResponse> {
        let mut body = json!({ "transcript": transcript, "persona": persona });
        if let Some((level, score)) = energy {
            body["energy"] = json!({ "level": level, "score": score });
        }
        self.post("/improv/prompt", &body).await
    }

    pub async fn respond(&self, transcript: &str, persona: Option<&str>) -> Result<ReplyResponse> {
        self.post(
            "/improv/respond",
            &json!({ "transcript": transcript, "persona": persona }),
        )
        .await
    }

    pub async fn fallback(&self, text: &str) -> Result<ReplyResponse> {
        self.post("/improv/fallback", &json!({ "text": text })).await
    }

    pub async fn add_checkin(&self, request: &CreateCheckInRequest) -> Result<CheckInResponse> {
        self.post("/wellness/checkins", request).await
    }

    pub async fn list_checkins(&self, limit: Option<usize>) -> Result<Vec<CheckInResponse>> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.get("/wellness/checkins", &query).await
    }

    /// Latest check-in, `None` when the log is empty
    pub async fn latest_checkin(&self) -> Result<Option<CheckInResponse>> {
        let url = format!("{}/wellness/checkins/latest", self.base_url);
        let resp = self.send(self.client.get(&url)).await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(parse(resp).await?))
    }

    pub async fn concepts(&self) -> Result<Vec<ConceptResponse>> {
        self.get("/tutor/concepts", &[]).await
    }

    pub async fn record_progress(&self, request: &RecordProgressRequest) -> Result<ProgressResponse> {
        self.post("/tutor/progress", request).await
    }

    pub async fn progress(&self, concept: Option<&str>) -> Result<Vec<ProgressResponse>> {
        let mut query = Vec::new();
        if let Some(concept) = concept {
            query.push(("concept", concept.to_string()));
        }
        self.get("/tutor/progress", &query).await
    }

    pub async fn mastery(&self) -> Result<Vec<MasteryResponse>> {
        self.get("/tutor/mastery", &[]).await
    }

    // ============================================
    // Helpers
    // ============================================

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        self.authed(request)
            .send()
            .await
            .context("Failed to connect to Parley API")
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.send(self.client.get(&url).query(query)).await?;
        parse(resp).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.send(self.client.post(&url).json(body)).await?;
        parse(resp).await
    }
}

async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }

    resp.json().await.context("Failed to parse response")
}
