//! Configuration handling for the TUI

use crate::api::{ApiClientConfig, DEFAULT_TIMEOUT_MS};
use crate::env::ClientEnv;
use crate::state::View;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base URL used when neither `API_URL` nor the config file provides one
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TuiConfig {
    /// API base URL
    pub api_base_url: Option<String>,
    /// Default request timeout in milliseconds
    pub api_timeout_ms: Option<u64>,
    /// Headers sent with every request
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub api_headers: BTreeMap<String, String>,
    /// Page shown at startup
    pub start_view: Option<View>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "starter", "starter-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
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
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn start_view(&self) -> View {
        self.start_view.unwrap_or_default()
    }

    /// Client settings: `API_URL` from the environment wins over the file
    pub fn api_client_config(&self, env: &ClientEnv) -> ApiClientConfig {
        let base_url = env
            .api_url
            .as_ref()
            .map(|url| url.as_str().trim_end_matches('/').to_string())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout = Duration::from_millis(self.api_timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS));

        self.api_headers.iter().fold(
            ApiClientConfig::new(base_url).with_timeout(timeout),
            |config, (name, value)| config.with_header(name, value),
        )
    }
}
