use crate::core::Transaction;
use crate::error::Result;
use crate::utils::digest_hex;
use serde::{Deserialize, Serialize};

/// An immutable record binding a batch of transactions to a proof-of-work
/// nonce and the previous block's hash.
///
/// A block has no stored hash field: its identity is recomputed from the
/// canonical encoding of the whole record, so it depends on the
/// transactions it carries. Blocks are never mutated once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    timestamp: f64,
    transactions: Vec<Transaction>,
    nonce: u64,
    previous_hash: String,
}

impl Block {
    pub(crate) fn new(
        timestamp: f64,
        transactions: Vec<Transaction>,
        nonce: u64,
        previous_hash: String,
    ) -> Block {
        Block {
            timestamp,
            transactions,
            nonce,
            previous_hash,
        }
    }

    /// Hex SHA-256 of this block's canonical encoding.
    pub fn hash(&self) -> Result<String> {
        digest_hex(self)
    }

    pub fn get_timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }

    pub fn get_previous_hash(&self) -> &str {
        self.previous_hash.as_str()
    }
}
