use crate::error::ChainError;
use crate::transaction::TransactionRecord;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// 64-bit content identifier of a block.
///
/// Rendered as `0x` followed by 16 upper-case hex digits. Serialized the same
/// way so JSON dumps read like the console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BlockHash(u64);

impl BlockHash {
    /// "No predecessor" marker carried by the genesis block.
    pub const GENESIS: BlockHash = BlockHash(u64::MAX);

    pub const fn from_u64(value: u64) -> Self {
        BlockHash(value)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn is_genesis(&self) -> bool {
        *self == Self::GENESIS
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:016X}", self.0)
    }
}

impl FromStr for BlockHash {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() || digits.len() > 16 {
            return Err(ChainError::InvalidHash(format!(
                "expected 1 to 16 hex digits, got {:?}",
                s
            )));
        }

        u64::from_str_radix(digits, 16)
            .map(BlockHash)
            .map_err(|e| ChainError::InvalidHash(format!("{:?}: {}", s, e)))
    }
}

impl From<BlockHash> for String {
    fn from(hash: BlockHash) -> Self {
        hash.to_string()
    }
}

impl TryFrom<String> for BlockHash {
    type Error = ChainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Immutable block whose `current_hash` is derived from its contents.
///
/// Deserialized blocks carry whatever hash the input claimed and are untrusted
/// until `verify_hash` passes (`Chain::from_blocks` checks every block).
/// `Chain::find` accepts such blocks but never follows `BlockHash::GENESIS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    previous_hash: BlockHash,
    transactions: Vec<TransactionRecord>,
    current_hash: BlockHash,
}

impl Block {
    pub fn new(previous_hash: BlockHash, transactions: Vec<TransactionRecord>) -> Self {
        let current_hash = Block::compute_hash(previous_hash, &transactions);
        Block {
            previous_hash,
            transactions,
            current_hash,
        }
    }

    /// Content hash over the decimal form of `previous_hash` followed by every
    /// record in order, with no separators.
    ///
    /// SHA-256 truncated to its first 8 bytes (big-endian), so identifiers are
    /// stable across runs. A digest landing on the sentinel is remapped to
    /// `u64::MAX - 1`; real blocks never carry `BlockHash::GENESIS`.
    pub fn compute_hash(previous_hash: BlockHash, transactions: &[TransactionRecord]) -> BlockHash {
        let mut hasher = Sha256::new();
        hasher.update(previous_hash.as_u64().to_string().as_bytes());
        for tx in transactions {
            hasher.update(tx.as_str().as_bytes());
        }
        let digest = hasher.finalize();

        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let value = u64::from_be_bytes(prefix);

        if value == BlockHash::GENESIS.as_u64() {
            BlockHash(u64::MAX - 1)
        } else {
            BlockHash(value)
        }
    }

    pub fn previous_hash(&self) -> BlockHash {
        self.previous_hash
    }

    pub fn current_hash(&self) -> BlockHash {
        self.current_hash
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_genesis()
    }

    /// Recomputes the content hash and compares it with the stored one.
    /// Only blocks that came in through deserialization can fail this.
    pub fn verify_hash(&self) -> bool {
        Block::compute_hash(self.previous_hash, &self.transactions) == self.current_hash
    }
}
