// The chain engine: one instance owns one chain and one transaction pool.
// Everything lives in process memory for the process lifetime; there is no
// persistence layer and no peer, so the engine never has to reconcile state
// with anything but its own pool.

use crate::config::Settings;
use crate::core::monetary::MINING_SENDER;
use crate::core::{Block, ProofOfWork, Transaction};
use crate::error::Result;
use crate::utils::{current_timestamp, digest_hex};
use log::info;
use serde_json::{Map, Value};

/// Single-node ledger over an append-only block list and a pending pool.
///
/// Not designed for concurrent mutation: `mine` is CPU-bound and blocks the
/// owning thread for the whole nonce search, and callers sharing an instance
/// across threads must serialize access externally.
pub struct Blockchain {
    transaction_pool: Vec<Transaction>,
    chain: Vec<Block>,
    blockchain_address: Option<String>,
    difficulty: usize,
    mining_reward: f64,
}

impl Blockchain {
    /// Construct a chain with default settings and an optional owner
    /// address (the recipient of mining rewards).
    pub fn new(blockchain_address: Option<String>) -> Result<Blockchain> {
        Self::with_settings(blockchain_address, &Settings::new())
    }

    pub fn with_settings(
        blockchain_address: Option<String>,
        settings: &Settings,
    ) -> Result<Blockchain> {
        let mut blockchain = Blockchain {
            transaction_pool: vec![],
            chain: vec![],
            blockchain_address,
            difficulty: settings.get_difficulty(),
            mining_reward: settings.get_mining_reward(),
        };

        // Genesis block: nonce 0, previous hash of the (empty) chain so far.
        let previous_hash = blockchain.last_block_hash()?;
        blockchain.create_block(0, previous_hash)?;
        info!("Created chain with genesis block");

        Ok(blockchain)
    }

    /// Append a transfer record to the pool, in call order. Always succeeds:
    /// addresses and value sign are not validated here, and no signature is
    /// checked on ingestion (known limitation of this design; detached
    /// signatures travel out of band between wallet and boundary callers).
    pub fn add_transaction(&mut self, sender: &str, recipient: &str, value: f64) -> bool {
        self.transaction_pool
            .push(Transaction::new(sender, recipient, value));
        true
    }

    /// Find a nonce for the current pool contents.
    ///
    /// The search runs over a snapshot of the pool taken here; the live pool
    /// is not touched while the scan runs. Blocking and unbounded.
    pub fn proof_of_work(&self) -> Result<u64> {
        let transactions = self.transaction_pool.clone();
        let previous_hash = self.last_block_hash()?;
        ProofOfWork::new(transactions, previous_hash, self.difficulty).run()
    }

    /// Append a reward transaction, search for a nonce, and commit a block.
    ///
    /// The reward is unconditional per call: sender is the reserved
    /// `MINING_SENDER` constant, recipient the owner address. The committed
    /// block carries whatever the pool holds at commit time, while the nonce
    /// was searched against the snapshot taken when the search began; the
    /// tip hash is re-read after the search for the same reason.
    pub fn mine(&mut self) -> Result<bool> {
        let recipient = self.blockchain_address.clone().unwrap_or_default();
        self.add_transaction(MINING_SENDER, &recipient, self.mining_reward);

        let nonce = self.proof_of_work()?;
        let previous_hash = self.last_block_hash()?;
        self.create_block(nonce, previous_hash)?;

        info!("action=mining status=success");
        Ok(true)
    }

    /// Build a block from the entire current pool and append it to the
    /// chain. The pool is left empty; this is the only place it is cleared.
    pub fn create_block(&mut self, nonce: u64, previous_hash: String) -> Result<()> {
        let transactions = std::mem::take(&mut self.transaction_pool);
        let block = Block::new(current_timestamp()?, transactions, nonce, previous_hash);
        self.chain.push(block);
        Ok(())
    }

    /// Net balance of an address: a full scan over every transaction in
    /// every block, crediting receipts and debiting sends. No cached ledger
    /// state; O(total transactions) per call. 0.0 for unknown addresses.
    pub fn calculate_balance(&self, blockchain_address: &str) -> f64 {
        let mut total_amount = 0.0;
        for block in &self.chain {
            for transaction in block.get_transactions() {
                if blockchain_address == transaction.get_recipient() {
                    total_amount += transaction.get_value();
                }
                if blockchain_address == transaction.get_sender() {
                    total_amount -= transaction.get_value();
                }
            }
        }
        total_amount
    }

    /// Read-only view of the chain for boundary serialization.
    pub fn get_chain(&self) -> &[Block] {
        self.chain.as_slice()
    }

    pub fn get_transaction_pool(&self) -> &[Transaction] {
        self.transaction_pool.as_slice()
    }

    pub fn get_blockchain_address(&self) -> Option<&str> {
        self.blockchain_address.as_deref()
    }

    pub fn get_difficulty(&self) -> usize {
        self.difficulty
    }

    // Hash of the last block, or of an empty mapping when no block exists
    // yet (the genesis parent).
    fn last_block_hash(&self) -> Result<String> {
        match self.chain.last() {
            Some(block) => block.hash(),
            None => digest_hex(&Map::<String, Value>::new()),
        }
    }
}
