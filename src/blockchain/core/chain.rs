use crate::blockchain::core::block::{Block, BlockHash};
use crate::blockchain::core::validation::validate_linkage;
use crate::error::{ChainError, Result};
use crate::transaction::{TransactionRecord, TransactionSource};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Chain handle for callers that append from several threads.
/// `Chain` itself does no locking.
pub type SharedChain = Arc<RwLock<Chain>>;

/// Append-only sequence of blocks, genesis first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Block>", try_from = "Vec<Block>")]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a chain from an existing block sequence, rejecting any sequence
    /// that `add` could not have produced.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self> {
        validate_linkage(&blocks)?;
        Ok(Chain { blocks })
    }

    pub fn into_shared(self) -> SharedChain {
        Arc::new(RwLock::new(self))
    }

    /// Seal `transactions` into a new block linked to the current tip and
    /// return its hash. The first block links to `BlockHash::GENESIS`.
    pub fn add(&mut self, transactions: Vec<TransactionRecord>) -> BlockHash {
        let previous_hash = self
            .blocks
            .last()
            .map_or(BlockHash::GENESIS, |b| b.current_hash());

        let block = Block::new(previous_hash, transactions);
        let hash = block.current_hash();

        debug!(
            height = self.blocks.len(),
            %previous_hash,
            current_hash = %hash,
            transactions = block.transactions().len(),
            "appended block"
        );

        self.blocks.push(block);
        hash
    }

    /// Pull one batch from `source` and append it.
    pub fn add_from<S: TransactionSource + ?Sized>(&mut self, source: &mut S) -> BlockHash {
        self.add(source.next_batch())
    }

    pub fn get_blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Walk back-references from `header_id` through `candidate_blocks`.
    ///
    /// The result starts at the block whose hash is `header_id` and ends at the
    /// genesis block, or at the first block whose predecessor cannot be
    /// resolved. `BlockHash::GENESIS` is never followed, even if a forged
    /// candidate claims it as its own hash. An unknown `header_id` yields an
    /// empty path. When several candidates share a hash, the first one in
    /// slice order wins.
    ///
    /// Candidates need not be ordered or even belong to one chain. A loop of
    /// back-references is reported as `ChainError::CycleDetected`.
    pub fn find(header_id: BlockHash, candidate_blocks: &[Block]) -> Result<Vec<Block>> {
        let mut index: HashMap<BlockHash, &Block> = HashMap::with_capacity(candidate_blocks.len());
        for block in candidate_blocks {
            index.entry(block.current_hash()).or_insert(block);
        }

        let mut path = Vec::new();
        let mut visited = HashSet::new();
        let mut current = header_id;

        while !current.is_genesis() {
            let Some(block) = index.get(&current) else {
                break;
            };
            if !visited.insert(current) {
                warn!(hash = %current, depth = path.len(), "back-reference cycle");
                return Err(ChainError::CycleDetected(current));
            }

            debug!(hash = %current, previous = %block.previous_hash(), "find step");
            path.push((*block).clone());
            current = block.previous_hash();
        }

        debug!(head = %header_id, length = path.len(), "find complete");
        Ok(path)
    }

    /// `find` over this chain's own blocks.
    pub fn find_from(&self, header_id: BlockHash) -> Result<Vec<Block>> {
        Chain::find(header_id, &self.blocks)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl From<Chain> for Vec<Block> {
    fn from(chain: Chain) -> Self {
        chain.blocks
    }
}

impl TryFrom<Vec<Block>> for Chain {
    type Error = ChainError;

    fn try_from(blocks: Vec<Block>) -> std::result::Result<Self, Self::Error> {
        Chain::from_blocks(blocks)
    }
}
