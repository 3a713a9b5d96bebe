use crate::transaction::types::{Side, Trade, TransactionRecord, COINS, MAX_AMOUNT, MIN_AMOUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Producer of transaction batches handed to `Chain::add_from`.
pub trait TransactionSource {
    fn next_batch(&mut self) -> Vec<TransactionRecord>;
}

impl<F> TransactionSource for F
where
    F: FnMut() -> Vec<TransactionRecord>,
{
    fn next_batch(&mut self) -> Vec<TransactionRecord> {
        self()
    }
}

/// Random buy/sell trades over `COINS`.
///
/// Each batch holds between 1 and `max(2, max_transactions) - 1` trades.
pub struct RandomTransactionSource {
    rng: StdRng,
    max_transactions: usize,
}

impl RandomTransactionSource {
    /// Seeded from OS entropy.
    pub fn new(max_transactions: usize) -> Self {
        RandomTransactionSource {
            rng: StdRng::from_entropy(),
            max_transactions,
        }
    }

    /// Same seed, same batches.
    pub fn with_seed(max_transactions: usize, seed: u64) -> Self {
        RandomTransactionSource {
            rng: StdRng::seed_from_u64(seed),
            max_transactions,
        }
    }

    pub fn max_transactions(&self) -> usize {
        self.max_transactions
    }

    pub fn next_trade(&mut self) -> Trade {
        let side = if self.rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let amount = self.rng.gen_range(MIN_AMOUNT..=MAX_AMOUNT);
        let coin = COINS[self.rng.gen_range(0..COINS.len())];
        Trade::new(side, amount, coin)
    }
}

impl TransactionSource for RandomTransactionSource {
    fn next_batch(&mut self) -> Vec<TransactionRecord> {
        let upper = self.max_transactions.max(2);
        let count = self.rng.gen_range(1..upper);
        (0..count).map(|_| self.next_trade().to_record()).collect()
    }
}

/// Replays queued batches in order, then yields empty batches.
#[derive(Debug, Clone, Default)]
pub struct FixedTransactionSource {
    batches: VecDeque<Vec<TransactionRecord>>,
}

impl FixedTransactionSource {
    pub fn new(batches: Vec<Vec<TransactionRecord>>) -> Self {
        FixedTransactionSource {
            batches: batches.into(),
        }
    }

    pub fn push(&mut self, batch: Vec<TransactionRecord>) {
        self.batches.push_back(batch);
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl TransactionSource for FixedTransactionSource {
    fn next_batch(&mut self) -> Vec<TransactionRecord> {
        self.batches.pop_front().unwrap_or_default()
    }
}
