//! Configuration handling for the TUI
//!
//! The configuration is resolved once in `main` (file, then environment
//! overrides) and handed to the app; views never consult the environment.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default backend address
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default number of search hits requested
pub const DEFAULT_TOP_K: u32 = 5;

/// Confluence connection values forwarded with search requests
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConfluenceConfig {
    /// Confluence base URL
    pub base_url: Option<String>,
    /// Space to search in
    pub space_key: Option<String>,
    /// Token forwarded to the backend
    pub auth_token: Option<String>,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TuiConfig {
    /// Backend base URL
    pub api_url: Option<String>,
    /// Number of search results requested
    pub search_top_k: Option<u32>,
    /// Confluence values for the search view
    pub confluence: ConfluenceConfig,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "tgpt", "tgpt-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file; `None` when the platform has no data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("tgpt-tui.log"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    ///
    /// Recognised keys: `TGPT_API_URL`, `CONFLUENCE_URL`,
    /// `CONFLUENCE_SPACE_KEY`, `CONFLUENCE_AUTH_TOKEN`.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(url) = non_empty("TGPT_API_URL") {
            self.api_url = Some(url);
        }
        if let Some(url) = non_empty("CONFLUENCE_URL") {
            self.confluence.base_url = Some(url);
        }
        if let Some(key) = non_empty("CONFLUENCE_SPACE_KEY") {
            self.confluence.space_key = Some(key);
        }
        if let Some(token) = non_empty("CONFLUENCE_AUTH_TOKEN") {
            self.confluence.auth_token = Some(token);
        }
        self
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn top_k(&self) -> u32 {
        self.search_top_k.unwrap_or(DEFAULT_TOP_K)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_url.is_none());
        assert!(config.search_top_k.is_none());
        assert_eq!(config.confluence, ConfluenceConfig::default());
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.top_k(), 5);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_url: Some("http://api.internal:8000".to_string()),
            search_top_k: Some(10),
            confluence: ConfluenceConfig {
                base_url: Some("https://wiki.example.com".to_string()),
                space_key: Some("ENG".to_string()),
                auth_token: Some("token".to_string()),
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_partial_confluence_section() {
        let json = r#"{"confluence": {"space_key": "OPS"}, "unknown_field": 1}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.confluence.space_key.as_deref(), Some("OPS"));
        assert!(parsed.confluence.base_url.is_none());
    }

    #[test]
    fn test_env_overrides_replace_file_values() {
        let config = TuiConfig {
            api_url: Some("http://from-file".to_string()),
            ..Default::default()
        }
        .with_env_overrides(env(&[
            ("TGPT_API_URL", "http://from-env"),
            ("CONFLUENCE_URL", "https://wiki"),
            ("CONFLUENCE_SPACE_KEY", "DOCS"),
            ("CONFLUENCE_AUTH_TOKEN", "abc"),
        ]));

        assert_eq!(config.api_url(), "http://from-env");
        assert_eq!(config.confluence.base_url.as_deref(), Some("https://wiki"));
        assert_eq!(config.confluence.space_key.as_deref(), Some("DOCS"));
        assert_eq!(config.confluence.auth_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = TuiConfig {
            api_url: Some("http://from-file".to_string()),
            ..Default::default()
        }
        .with_env_overrides(env(&[("TGPT_API_URL", "")]));
        assert_eq!(config.api_url(), "http://from-file");
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"api_url": "http://10.0.0.2:8000", "search_top_k": 3}"#).unwrap();

        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url(), "http://10.0.0.2:8000");
        assert_eq!(config.top_k(), 3);
    }

    #[test]
    fn test_load_from_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
    }
}
