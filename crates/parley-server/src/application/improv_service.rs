//! Improv Application Service (Use Case)
//!
//! One user turn: classify energy, build the prompt, ask the language model,
//! and fall back to a canned reply when the model is unavailable.

use serde::Serialize;
use std::sync::Arc;

use parley::{
    AgentKind, ChatMessage, CompletionOptions, EnergyReading, FallbackResponder, LlmProvider,
    PromptRequest,
};

/// Where an improv reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Llm,
    Fallback,
}

/// Reply to one user turn
#[derive(Debug, Clone, Serialize)]
pub struct ImprovReply {
    pub reply: String,
    pub source: ReplySource,
    pub energy: EnergyReading,
}

/// Application service for improv turns
pub struct ImprovService {
    llm: Option<Arc<dyn LlmProvider>>,
    fallback: FallbackResponder,
    default_persona: Option<String>,
}

impl ImprovService {
    pub fn new(llm: Option<Arc<dyn LlmProvider>>, default_persona: Option<String>) -> Self {
        Self {
            llm,
            fallback: FallbackResponder::new(),
            default_persona,
        }
    }

    /// Request persona if given, otherwise the configured default.
    /// A non-blank persona is passed through untouched.
    pub fn persona(&self, requested: Option<String>) -> Option<String> {
        requested
            .filter(|p| !p.trim().is_empty())
            .or_else(|| self.default_persona.clone())
    }

    /// Build the prompt request for a transcript
    pub fn prepare(&self, transcript: &str, persona: Option<String>) -> PromptRequest {
        PromptRequest::new(transcript, self.persona(persona))
    }

    /// Canned reply, no model involved
    pub fn fallback(&self, transcript: &str) -> String {
        self.fallback.reply_random(transcript)
    }

    /// Generate a reply for one user turn
    pub async fn respond(&self, transcript: &str, persona: Option<String>) -> ImprovReply {
        let request = self.prepare(transcript, persona);

        let Some(llm) = &self.llm else {
            tracing::debug!("No LLM configured, using fallback reply");
            return self.fallback_reply(&request);
        };

        let messages = vec![
            ChatMessage::system(AgentKind::Improv.instructions()),
            ChatMessage::user(request.render()),
        ];

        match llm.complete(&messages, &CompletionOptions::default()).await {
            Ok(response) if !response.content.trim().is_empty() => {
                tracing::debug!(
                    "Improv reply from {}/{} ({} tokens)",
                    llm.provider_name(),
                    llm.model_id(),
                    response.usage.total_tokens
                );
                ImprovReply {
                    reply: response.content.trim().to_string(),
                    source: ReplySource::Llm,
                    energy: request.energy,
                }
            }
            Ok(_) => {
                tracing::warn!("LLM returned an empty reply, using fallback");
                self.fallback_reply(&request)
            }
            Err(e) => {
                tracing::warn!("LLM call failed, using fallback: {}", e);
                self.fallback_reply(&request)
            }
        }
    }

    fn fallback_reply(&self, request: &PromptRequest) -> ImprovReply {
        ImprovReply {
            reply: self.fallback.reply_random(&request.transcript),
            source: ReplySource::Fallback,
            energy: request.energy,
        }
    }
}
