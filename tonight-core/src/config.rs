//! Configuration management for St. Augustine Tonight
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (TONIGHT_*)
//! 3. Config file (~/.config/tonight/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Settings for the chat-completion request that generates plans
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Model to ask for plans
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Upper bound on generated tokens
    pub max_tokens: u32,

    /// City the plans are for
    pub city: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 300,
            city: "St. Augustine, Florida".to_string(),
        }
    }
}

/// Values used when a plan request leaves a field out
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub budget: String,
    pub time: String,
    pub people: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            budget: "moderate".to_string(),
            time: "evening".to_string(),
            people: 2,
        }
    }
}

/// Locations of the venue catalogue and event exports
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VenuesConfig {
    /// Venue catalogue (JSON array)
    pub catalogue: Option<PathBuf>,

    /// External events (JSON array)
    pub events: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Plan generation settings
    pub generation: GenerationConfig,

    /// Plan request defaults
    pub defaults: DefaultsConfig,

    /// Venue data files
    pub venues: VenuesConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/tonight/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tonight").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - TONIGHT_MODEL: Model to use for plan generation
    /// - TONIGHT_VENUES_FILE: Path to the venue catalogue
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(model) = lookup("TONIGHT_MODEL") {
            self.generation.model = model;
        }

        if let Some(path) = lookup("TONIGHT_VENUES_FILE") {
            self.venues.catalogue = Some(PathBuf::from(path));
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, model: Option<String>, venues: Option<PathBuf>) -> Self {
        if let Some(m) = model {
            self.generation.model = m;
        }

        if let Some(path) = venues {
            self.venues.catalogue = Some(path);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(model: Option<String>, venues: Option<PathBuf>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(model, venues))
    }
}
