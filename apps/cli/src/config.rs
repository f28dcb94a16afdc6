//! Layered configuration for the `dimcalc` binary
//!
//! Sources, lowest priority first: built-in defaults, an optional TOML file
//! (`dimcalc.toml`, or the path in `DIMCALC_CONFIG`), then environment
//! variables such as `DIMCALC__LOGGING__LEVEL=debug`. A `.env` file is loaded
//! into the environment first. Command-line flags are applied on top by the
//! caller.

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "dimcalc.toml";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplConfig {
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Config {
    /// Load configuration from `.env`, the config file and the environment.
    pub fn load() -> anyhow::Result<Self> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        let path = std::env::var_os("DIMCALC_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Load configuration with `path` as the (optional) config file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("logging.json", false)?
            .set_default("output.format", "text")?
            .set_default("repl.prompt", "> ")?
            .add_source(::config::File::from(path).required(false))
            .add_source(
                ::config::Environment::with_prefix("DIMCALC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn validate(&self) -> Result<(), String> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            ));
        }
        Ok(())
    }
}
