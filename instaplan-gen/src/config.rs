//! Client configuration: API key and model selection.
//!
//! Resolution order: `GEMINI_API_KEY` environment variable wins over
//! `config.toml` under the user config dir. A missing key is only an error
//! when a request is actually attempted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub plan_model: String,
    pub advisor_model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            plan_model: "gemini-3-flash-preview".into(),
            advisor_model: "gemini-3-pro-preview".into(),
        }
    }
}

impl ClientConfig {
    /// Default config file location: `<config dir>/instaplan/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("instaplan")
            .join("config.toml")
    }

    /// Parse a config file. Fails loudly on malformed TOML — a half-read
    /// config would silently point requests at the wrong model.
    pub fn from_file(path: &Path) -> Result<Self, GenError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GenError::Config(format!("{}: {e}", path.display())))
    }

    /// Load from the default file (missing file is fine) and overlay the
    /// environment key.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(Self::default_path()) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        config
    }

    pub fn require_key(&self) -> Result<&str, GenError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GenError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_model_ids() {
        let config = ClientConfig::default();
        assert_eq!(config.plan_model, "gemini-3-flash-preview");
        assert_eq!(config.advisor_model, "gemini-3-pro-preview");
        assert!(config.require_key().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ClientConfig = toml::from_str("api_key = \"k-123\"").unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k-123"));
        assert_eq!(config.plan_model, "gemini-3-flash-preview");
        assert_eq!(config.require_key().unwrap(), "k-123");
    }

    #[test]
    fn empty_key_is_missing() {
        let config = ClientConfig {
            api_key: Some(String::new()),
            ..ClientConfig::default()
        };
        assert!(matches!(config.require_key(), Err(GenError::MissingApiKey)));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = [not toml").unwrap();
        assert!(matches!(
            ClientConfig::from_file(&path),
            Err(GenError::Config(_))
        ));
    }
}
