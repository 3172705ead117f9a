//! Server configuration
//!
//! Settings come from the process environment (after `.env.local` / `.env`
//! are loaded by `main`). Collaborator selection is resolved once at
//! startup into a [`SessionProfile`].

use serde::Serialize;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_STT_MODEL: &str = "nova-3";
const DEFAULT_GOOGLE_VOICE: &str = "alloy";
const MURF_STYLE: &str = "conversational";

const CHECKIN_LOG_FILE: &str = "wellness_log.json";
const PROGRESS_LOG_FILE: &str = "tutor_progress.json";

/// Raw server settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub llm_model: String,
    pub stt_model: String,
    pub murf_api_key: Option<String>,
    pub murf_voice: Option<String>,
    pub audio_filter: bool,
    pub improv_persona: Option<String>,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an injected lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            bind_addr: get("PARLEY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            data_dir: get("PARLEY_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            api_key: get("PARLEY_API_KEY"),
            google_api_key: get("GOOGLE_API_KEY"),
            llm_model: get("PARLEY_LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            stt_model: get("PARLEY_STT_MODEL").unwrap_or_else(|| DEFAULT_STT_MODEL.to_string()),
            murf_api_key: get("MURF_API_KEY"),
            murf_voice: get("MURF_VOICE"),
            audio_filter: get("ENABLE_AUDIO_FILTER")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
            improv_persona: get("IMPROV_PERSONA"),
        }
    }

    pub fn checkin_log_path(&self) -> PathBuf {
        self.data_dir.join(CHECKIN_LOG_FILE)
    }

    pub fn progress_log_path(&self) -> PathBuf {
        self.data_dir.join(PROGRESS_LOG_FILE)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Speech synthesis provider chosen for sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum TtsSelection {
    Murf { voice: String, style: String },
    Google { voice: String },
}

/// Collaborators a voice session is wired with
#[derive(Debug, Clone, Serialize)]
pub struct SessionProfile {
    pub stt_model: String,
    pub llm_model: String,
    pub llm_enabled: bool,
    pub tts: TtsSelection,
    pub audio_filter: bool,
    pub default_persona: Option<String>,
}

impl SessionProfile {
    /// Resolve the provider chain once from settings.
    ///
    /// Murf is used only when both its key and a voice are configured;
    /// otherwise sessions fall back to Google TTS.
    pub fn resolve(settings: &Settings) -> Self {
        let tts = match (&settings.murf_api_key, &settings.murf_voice) {
            (Some(_), Some(voice)) => TtsSelection::Murf {
                voice: voice.clone(),
                style: MURF_STYLE.to_string(),
            },
            _ => TtsSelection::Google {
                voice: DEFAULT_GOOGLE_VOICE.to_string(),
            },
        };

        Self {
            stt_model: settings.stt_model.clone(),
            llm_model: settings.llm_model.clone(),
            llm_enabled: settings.google_api_key.is_some(),
            tts,
            audio_filter: settings.audio_filter,
            default_persona: settings.improv_persona.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]);
        assert_eq!(s.bind_addr, "0.0.0.0:8000");
        assert_eq!(s.llm_model, "gemini-2.5-flash");
        assert_eq!(s.stt_model, "nova-3");
        assert!(!s.audio_filter);
        assert!(s.api_key.is_none());
        assert_eq!(s.checkin_log_path(), PathBuf::from("./wellness_log.json"));
    }

    #[test]
    fn test_audio_filter_flag_values() {
        for on in ["1", "true", "YES", " True "] {
            assert!(settings(&[("ENABLE_AUDIO_FILTER", on)]).audio_filter, "{on}");
        }
        for off in ["0", "false", "no", "enabled"] {
            assert!(!settings(&[("ENABLE_AUDIO_FILTER", off)]).audio_filter, "{off}");
        }
    }

    #[test]
    fn test_murf_needs_key_and_voice() {
        let only_key = SessionProfile::resolve(&settings(&[("MURF_API_KEY", "k")]));
        assert_eq!(
            only_key.tts,
            TtsSelection::Google {
                voice: "alloy".to_string()
            }
        );

        let both = SessionProfile::resolve(&settings(&[
            ("MURF_API_KEY", "k"),
            ("MURF_VOICE", "en-US-natalie"),
        ]));
        assert_eq!(
            both.tts,
            TtsSelection::Murf {
                voice: "en-US-natalie".to_string(),
                style: "conversational".to_string()
            }
        );
    }

    #[test]
    fn test_blank_values_are_unset() {
        let s = settings(&[("GOOGLE_API_KEY", "  "), ("IMPROV_PERSONA", "")]);
        assert!(s.google_api_key.is_none());
        assert!(s.improv_persona.is_none());
        assert!(!SessionProfile::resolve(&s).llm_enabled);
    }
}
