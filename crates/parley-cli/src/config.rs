//! Configuration management for Parley CLI
//!
//! Stores API key, saved personas, and default settings in ~/.config/parley/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "parley";
const CONFIG_FILE: &str = "config.toml";

/// A saved improv persona
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Role description handed to the prompt builder verbatim
    pub description: String,
}

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_persona: Option<String>,
    #[serde(default)]
    pub personas: BTreeMap<String, Persona>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_persona: None,
            personas: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    pub fn add_persona(&mut self, name: String, description: String) {
        self.personas.insert(name, Persona { description });
    }

    /// Remove a persona, clearing the default if it pointed there
    pub fn remove_persona(&mut self, name: &str) -> bool {
        let removed = self.personas.remove(name).is_some();
        if removed && self.default_persona.as_deref() == Some(name) {
            self.default_persona = None;
        }
        removed
    }

    pub fn set_default_persona(&mut self, name: String) -> bool {
        if self.personas.contains_key(&name) {
            self.default_persona = Some(name);
            true
        } else {
            false
        }
    }

    /// Persona description for a saved name, a literal description, or the default.
    ///
    /// An argument that is not a saved name is used as the description itself.
    pub fn resolve_persona(&self, arg: Option<&str>) -> Option<String> {
        match arg {
            Some(arg) => Some(
                self.personas
                    .get(arg)
                    .map(|p| p.description.clone())
                    .unwrap_or_else(|| arg.to_string()),
            ),
            None => self
                .default_persona
                .as_ref()
                .and_then(|name| self.personas.get(name))
                .map(|p| p.description.clone()),
        }
    }
}
