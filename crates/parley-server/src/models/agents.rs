//! Agent profile payloads

use serde::Serialize;

use parley::AgentKind;

#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub kind: AgentKind,
    pub greeting: String,
    pub instructions: String,
}
