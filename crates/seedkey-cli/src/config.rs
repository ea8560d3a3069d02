//! CLI configuration

use std::path::Path;

use anyhow::{Context, Result};
use seedkey_core::{OutputFormat, Seed};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::EMBEDDED_SEED;

/// Optional settings read from a JSON file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Seed to expand (hex). The embedded seed is used when absent.
    pub seed: Option<String>,

    /// Rendering for key bytes
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, seed: Option<String>, format: Option<OutputFormat>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// The configured seed, or the embedded one
    pub fn seed(&self) -> Result<Seed> {
        match &self.seed {
            Some(hex) => Seed::from_hex(hex).context("Invalid seed"),
            None => Ok(Seed::new(EMBEDDED_SEED)),
        }
    }
}
