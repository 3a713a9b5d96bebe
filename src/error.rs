//! Error types for HashLedger

use crate::blockchain::BlockHash;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Cycle detected while following back-references at block {0}")]
    CycleDetected(BlockHash),

    #[error("Invalid genesis block: previous hash is {0}, expected the genesis sentinel")]
    InvalidGenesis(BlockHash),

    #[error("Invalid block linkage at index {index}: expected previous hash {expected}, found {found}")]
    InvalidBlockLinkage {
        index: usize,
        expected: BlockHash,
        found: BlockHash,
    },

    #[error("Hash mismatch at index {index}: stored {stored}, computed {computed}")]
    HashMismatch {
        index: usize,
        stored: BlockHash,
        computed: BlockHash,
    },

    #[error("Invalid block hash: {0}")]
    InvalidHash(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::ConfigError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;
