//! Runtime configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Shortest health description accepted by doctor matching (after trimming).
pub const DEFAULT_MIN_DESCRIPTION_CHARS: usize = 20;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_DATABASE_PATH: &str = "NIRAMAY_DATABASE_PATH";
pub const ENV_GEMINI_MODEL: &str = "NIRAMAY_GEMINI_MODEL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_path: PathBuf,
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub request_timeout_secs: u64,
    pub min_description_chars: usize,
    /// Usually supplied through `GEMINI_API_KEY` rather than the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("niramay.db"),
            gemini_model: "gemini-2.0-flash".to_string(),
            gemini_endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            request_timeout_secs: 60,
            min_description_chars: DEFAULT_MIN_DESCRIPTION_CHARS,
            api_key: None,
        }
    }
}

impl Config {
    /// Load config from file, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; blank values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(path) = get(ENV_DATABASE_PATH) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(model) = get(ENV_GEMINI_MODEL) {
            self.gemini_model = model;
        }
        self
    }

    /// The API key, or an error naming the variable to set.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .with_context(|| format!("No AI service key configured; set {}", ENV_API_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.min_description_chars, 20);
    }

    #[test]
    fn test_load_written_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.request_timeout_secs = 15;
        config.database_path = PathBuf::from("/var/lib/niramay/store.db");
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"gemini_model": "gemini-1.5-pro"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.gemini_model, "gemini-1.5-pro");
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_API_KEY, "secret"),
            (ENV_DATABASE_PATH, "/tmp/other.db"),
            (ENV_GEMINI_MODEL, "  "),
        ]
        .into_iter()
        .collect();

        let config = Config::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.require_api_key().unwrap(), "secret");
        assert_eq!(config.database_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
    }

    #[test]
    fn test_require_api_key() {
        assert!(Config::default().require_api_key().is_err());
    }
}
