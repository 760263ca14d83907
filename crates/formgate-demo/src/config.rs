// File: src/config.rs
// Purpose: Configuration parsing from formgate.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Demo configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

/// Mock API behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Simulated round-trip latency in milliseconds (default: 150)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Reject every submission to exercise the retry path
    #[serde(default = "default_false")]
    pub fail_submissions: bool,
}

/// Which demo sections run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Whether to walk the input catalog (default: true)
    #[serde(default = "default_true")]
    pub show_catalog: bool,
}

fn default_latency_ms() -> u64 {
    150
}

fn default_false() -> bool {
    false
}

fn default_true() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            fail_submissions: false,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { show_catalog: true }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./formgate.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formgate.toml")
    }
}
