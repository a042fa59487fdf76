//! Utility functions and helpers
//!
//! This module contains cryptographic utilities, encoding functions,
//! and the canonical field-mapping encoder used for hashing.

pub mod canonical;
pub mod crypto;

pub use canonical::{digest_hex, to_canonical_json};
pub use crypto::{
    base58_decode, base58_encode, current_timestamp, ecdsa_p256_sha256_sign_digest,
    ecdsa_p256_sha256_sign_verify, new_key_pair, ripemd160_digest, sha256_digest, sha256_hex,
};
