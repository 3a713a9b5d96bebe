use serde::{Deserialize, Serialize};
use std::fmt;

/// Tradable asset symbols used by the generator.
pub const COINS: [&str; 16] = [
    "BTC", "LTC", "ETH", "BCH", "ETC", "XVG", "XRP", "XLM", "EOS", "BSV", "TRX", "ADA", "XMR",
    "NEM", "DASH", "NEO",
];

pub const MIN_AMOUNT: u32 = 1;
pub const MAX_AMOUNT: u32 = 100;

/// One opaque entry in a block's batch. Hashed as its raw UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionRecord(String);

impl TransactionRecord {
    pub fn new(text: impl Into<String>) -> Self {
        TransactionRecord(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionRecord {
    fn from(s: &str) -> Self {
        TransactionRecord(s.to_string())
    }
}

impl From<String> for TransactionRecord {
    fn from(s: String) -> Self {
        TransactionRecord(s)
    }
}

impl AsRef<str> for TransactionRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn marker(&self) -> &'static str {
        match self {
            Side::Buy => "B",
            Side::Sell => "S",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// A buy or sell order rendered as `"{side} {amount} {coin}"`, e.g. `B 47 EOS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub side: Side,
    pub amount: u32,
    pub coin: String,
}

impl Trade {
    pub fn new(side: Side, amount: u32, coin: impl Into<String>) -> Self {
        Trade {
            side,
            amount,
            coin: coin.into(),
        }
    }

    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord(self.to_string())
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.side, self.amount, self.coin)
    }
}

impl From<Trade> for TransactionRecord {
    fn from(trade: Trade) -> Self {
        trade.to_record()
    }
}
