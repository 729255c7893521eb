//! Host configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `mazebots.ron` in the working directory, or an explicit file
//! 3. Environment variables prefixed with `MAZEBOTS_`
//!
//! Example environment variable: `MAZEBOTS_SIMULATION__MAZE__CELL_SIZE=32`

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use mazebots_core::SimConfig;
use serde::{Deserialize, Serialize};

/// Main host configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimConfig,

    #[serde(default)]
    pub run: RunConfig,
}

/// Limits and output for a headless run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Stop after this many ticks
    pub max_ticks: u64,
    /// Stop after this many completed generations (0 = no limit)
    pub max_generations: u32,
    /// Show a progress bar
    pub progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_ticks: 100_000,
            max_generations: 0,
            progress: true,
        }
    }
}

impl AppConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `path` if given, otherwise `mazebots.ron` (if exists)
    /// 3. Environment variables prefixed with `MAZEBOTS_` (highest priority)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("MAZEBOTS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("mazebots")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .add_source(
                Config::try_from(&AppConfig::default())
                    .context("Failed to serialize default configuration")?,
            )
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (MAZEBOTS_RUN__MAX_TICKS, etc.)
            .add_source(env);

        let config = builder.build().context("Failed to build configuration")?;

        let app: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        app.simulation
            .validate()
            .context("Invalid simulation configuration")?;
        Ok(app)
    }
}
