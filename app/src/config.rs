//! Configuration management for the Rain Tomorrow predictor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with RAIN_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Artifact locations
    pub artifacts: ArtifactConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArtifactConfig {
    /// Serialized classifier path
    pub model_path: String,

    /// Preprocessing asset bundle path
    pub assets_path: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("RAIN_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("artifacts.model_path", "artifacts/rain_classifier.json")?
            .set_default(
                "artifacts.assets_path",
                "artifacts/preprocessing_assets.json",
            )?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RAIN_ prefix)
            .add_source(
                Environment::with_prefix("RAIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            model_path: "artifacts/rain_classifier.json".to_string(),
            assets_path: "artifacts/preprocessing_assets.json".to_string(),
        }
    }
}
