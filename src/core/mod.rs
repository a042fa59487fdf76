//! Core blockchain functionality
//!
//! This module contains the fundamental chain components: blocks,
//! transaction records, the chain engine, and proof-of-work consensus.

pub mod block;
pub mod blockchain;
pub mod monetary;
pub mod proof_of_work;
pub mod transaction;

pub use block::Block;
pub use blockchain::Blockchain;
pub use monetary::{parse_amount, MINING_DIFFICULTY, MINING_REWARD, MINING_SENDER};
pub use proof_of_work::ProofOfWork;
pub use transaction::Transaction;
