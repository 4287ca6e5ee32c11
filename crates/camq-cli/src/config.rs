use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use camq_core::DEFAULT_ENDPOINT;

/// Environment variable prefix (`CAMQ_ENDPOINT`, `CAMQ_TITLE`).
const ENV_PREFIX: &str = "CAMQ_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// URL questions are POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Heading shown at the top of the TUI
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_title() -> String {
    "CAM Chatbot".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            title: default_title(),
        }
    }
}

impl Config {
    /// Load from the default config file (if present) and the environment.
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok();
        Self::load_from(path.as_deref())
    }

    /// Layering: built-in defaults, then the TOML file, then `CAMQ_*` variables.
    /// A missing file contributes nothing.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("Invalid camq configuration")
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("camq"))
    }

    /// Apply a command-line endpoint, which wins over every other layer.
    pub fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint.to_string();
        }
        self
    }
}
