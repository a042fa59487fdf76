//! Wallet management and cryptographic operations
//!
//! This module handles key generation, chain address derivation, and
//! detached transaction signing/verification.

#[allow(clippy::module_inception)]
pub mod wallet;

pub use wallet::{
    derive_address, hash_pub_key, sign_transaction, transaction_digest, validate_address,
    verify_signature, Wallet, ADDRESS_CHECK_SUM_LEN,
};
