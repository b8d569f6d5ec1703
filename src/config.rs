//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default intake endpoint
const DEFAULT_INTAKE_ENDPOINT: &str = "http://127.0.0.1:3000/api/demo";

/// How long the success panel stays up before the dialog resets (2 seconds)
const DEFAULT_RESET_DELAY_MS: u64 = 2000;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the intake endpoint
pub const INTAKE_ENDPOINT_ENV: &str = "LORE_INTAKE_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// URL the demo request is posted to
    pub intake_endpoint: Option<String>,
    /// Delay before the dialog resets after a successful submission
    pub reset_delay_ms: Option<u64>,
    /// Give up on the intake request after this many seconds
    pub request_timeout_secs: Option<u64>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "lorememory", "lore-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        if let Ok(endpoint) = std::env::var(INTAKE_ENDPOINT_ENV) {
            config.intake_endpoint = Some(endpoint);
        }
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn intake_endpoint(&self) -> &str {
        self.intake_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_INTAKE_ENDPOINT)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms.unwrap_or(DEFAULT_RESET_DELAY_MS))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
