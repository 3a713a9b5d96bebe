//! Configuration management for HashLedger

use crate::error::{ChainError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "hashledger.toml";

/// The demonstration never builds fewer blocks than this.
pub const MIN_BLOCKS: usize = 10;
/// Nor caps a batch below this many transactions.
pub const MIN_TRANSACTIONS: usize = 6;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_blocks")]
    pub blocks: usize,
    #[serde(default = "default_max_transactions")]
    pub max_transactions: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            blocks: default_blocks(),
            max_transactions: default_max_transactions(),
            seed: None,
        }
    }
}

impl LedgerConfig {
    pub fn effective_blocks(&self) -> usize {
        self.blocks.max(MIN_BLOCKS)
    }

    pub fn effective_max_transactions(&self) -> usize {
        self.max_transactions.max(MIN_TRANSACTIONS)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_blocks() -> usize {
    MIN_BLOCKS
}

fn default_max_transactions() -> usize {
    MIN_TRANSACTIONS
}

fn default_log_level() -> String {
    "warn".to_string()
}

pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    validate(&config)?;
    Ok(config)
}

/// Load `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

fn validate(config: &Config) -> Result<()> {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ChainError::ConfigError(format!(
            "logging.level must be one of {}, got {:?}",
            LOG_LEVELS.join("|"),
            config.logging.level
        )));
    }
    Ok(())
}
