use crate::blockchain::core::block::{Block, BlockHash};
use crate::error::{ChainError, Result};

/// Check that `blocks` is a chain `Chain::add` could have produced: genesis
/// first, every block pointing at its predecessor, every hash recomputable.
/// An empty slice is a valid (empty) chain.
pub fn validate_linkage(blocks: &[Block]) -> Result<()> {
    let mut expected = BlockHash::GENESIS;

    for (index, block) in blocks.iter().enumerate() {
        if index == 0 && !block.is_genesis() {
            return Err(ChainError::InvalidGenesis(block.previous_hash()));
        }

        if block.previous_hash() != expected {
            return Err(ChainError::InvalidBlockLinkage {
                index,
                expected,
                found: block.previous_hash(),
            });
        }

        if !block.verify_hash() {
            return Err(ChainError::HashMismatch {
                index,
                stored: block.current_hash(),
                computed: Block::compute_hash(block.previous_hash(), block.transactions()),
            });
        }

        expected = block.current_hash();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::Chain;
    use crate::transaction::TransactionRecord;

    fn sample_chain() -> Chain {
        let mut chain = Chain::new();
        chain.add(vec![TransactionRecord::from("B 47 EOS")]);
        chain.add(vec![TransactionRecord::from("B 82 TRX"), TransactionRecord::from("S 75 BCH")]);
        chain.add(vec![TransactionRecord::from("S 65 EOS")]);
        chain
    }

    #[test]
    fn test_valid_chain_passes() {
        assert!(validate_linkage(sample_chain().get_blocks()).is_ok());
        assert!(validate_linkage(&[]).is_ok());
    }

    #[test]
    fn test_missing_genesis_rejected() {
        let chain = sample_chain();
        let result = validate_linkage(&chain.get_blocks()[1..]);
        assert!(matches!(result, Err(ChainError::InvalidGenesis(_))));
    }

    #[test]
    fn test_gap_rejected() {
        let chain = sample_chain();
        let blocks = vec![chain.get_blocks()[0].clone(), chain.get_blocks()[2].clone()];

        match validate_linkage(&blocks) {
            Err(ChainError::InvalidBlockLinkage { index, expected, found }) => {
                assert_eq!(index, 1);
                assert_eq!(expected, chain.get_blocks()[0].current_hash());
                assert_eq!(found, chain.get_blocks()[1].current_hash());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_tampered_transactions_rejected() {
        let chain = sample_chain();
        let mut json = serde_json::to_value(chain.get_blocks()).unwrap();
        json[1]["transactions"][0] = serde_json::Value::String("B 1 TRX".to_string());
        let blocks: Vec<Block> = serde_json::from_value(json).unwrap();

        let result = validate_linkage(&blocks);
        assert!(matches!(result, Err(ChainError::HashMismatch { index: 1, .. })));
        assert_eq!(
            result.unwrap_err().to_string().split(':').next(),
            Some("Hash mismatch at index 1")
        );
    }
}
