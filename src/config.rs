use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::query::SortOrder;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Creating an analysis waits on the service's LLM call
    #[serde(default = "default_analysis_timeout")]
    pub analysis_timeout_secs: u64,

    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub timeline_order: SortOrder,

    #[serde(default = "default_suggestions")]
    pub suggested_inventions: Vec<String>,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_analysis_timeout() -> u64 {
    300
}

fn default_tick_rate() -> u64 {
    100
}

fn default_suggestions() -> Vec<String> {
    [
        "Microwave Oven",
        "Post-it Notes",
        "Penicillin",
        "X-ray",
        "Velcro",
        "Pacemaker",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout(),
            analysis_timeout_secs: default_analysis_timeout(),
            tick_rate_ms: default_tick_rate(),
            timeline_order: SortOrder::default(),
            suggested_inventions: default_suggestions(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Read the config at `path`, writing the defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("invention-origins")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_base_url)
            .map_err(|e| AppError::Config(format!("api_base_url {:?}: {}", self.api_base_url, e)))?;
        if self.tick_rate_ms == 0 {
            return Err(AppError::Config("tick_rate_ms must be positive".to_string()));
        }
        Ok(())
    }
}
