//! # Scholar Chain - An Educational Single-Node Ledger
//!
//! An append-only chain of blocks over a pool of value-transfer records,
//! admitted by a brute-force proof-of-work search, with a companion wallet
//! deriving Bitcoin-style addresses and detached ECDSA signatures.
//!
//! ## How the code is organized
//! - `core/`: the chain engine (blocks, transaction records, mining,
//!   proof-of-work, balance accounting)
//! - `wallet/`: key generation, address derivation, transaction signing
//! - `utils/`: digest primitives and the canonical field-mapping encoder
//! - `config/`: explicit per-instance node settings
//! - `error/`: error types shared across the crate
//!
//! ## What this deliberately is not
//! Single node, single thread, in-memory only. There is no peer networking,
//! no fork resolution, no persistence, no dynamic difficulty, and no
//! signature verification when a record enters the pool - the wallet's
//! signatures are detached artifacts for boundary callers to transmit and
//! check. The proof-of-work loop has no upper bound and blocks its thread
//! until it finds a nonce.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use crate::config::Settings;
pub use crate::core::{
    parse_amount, Block, Blockchain, ProofOfWork, Transaction, MINING_DIFFICULTY, MINING_REWARD,
    MINING_SENDER,
};
pub use crate::error::{BlockchainError, Result};
pub use crate::utils::{
    base58_decode, base58_encode, current_timestamp, digest_hex, ripemd160_digest, sha256_digest,
    sha256_hex, to_canonical_json,
};
pub use crate::wallet::{
    derive_address, hash_pub_key, sign_transaction, transaction_digest, validate_address,
    verify_signature, Wallet, ADDRESS_CHECK_SUM_LEN,
};
