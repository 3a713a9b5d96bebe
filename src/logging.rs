//! Tracing subscriber setup for the binaries.
//!
//! Output goes to stderr so stdout stays clean for tables and JSON.

use crate::error::{ChainError, Result};
use tracing::Level;

pub fn parse_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| ChainError::ConfigError(format!("unknown log level {:?}", level)))
}

/// Install the global fmt subscriber. Returns an error if one is already set.
pub fn init_logging(level: &str) -> Result<()> {
    let level = parse_level(level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ChainError::ConfigError(format!("failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level("DEBUG").unwrap(), Level::DEBUG);
        assert!(parse_level("chatty").is_err());
    }
}
