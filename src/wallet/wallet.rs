use crate::core::Transaction;
use crate::error::{BlockchainError, Result};
use crate::utils::{
    base58_decode, base58_encode, ecdsa_p256_sha256_sign_digest, ecdsa_p256_sha256_sign_verify,
    ripemd160_digest, sha256_digest, to_canonical_json,
};
use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use ring::rand::SystemRandom;
use ring::signature::{EcdsaKeyPair, KeyPair, ECDSA_P256_SHA256_FIXED_SIGNING};

const VERSION: u8 = 0x00;
pub const ADDRESS_CHECK_SUM_LEN: usize = 4;

// Uncompressed P-256 point: 0x04 tag plus two 32-byte coordinates.
const PUBLIC_KEY_LEN: usize = 65;

/// A spendable identity: ECDSA P-256 key pair plus the chain address
/// derived from the public key.
///
/// The private key is generated once, held in memory for the wallet's
/// lifetime, and never persisted. The address is computed once at creation
/// and cached.
pub struct Wallet {
    pkcs8: Vec<u8>,
    public_key: Vec<u8>,
    address: String,
}

impl Wallet {
    pub fn new() -> Result<Wallet> {
        let pkcs8 = crate::utils::new_key_pair()?;
        let rng = SystemRandom::new();
        let key_pair =
            EcdsaKeyPair::from_pkcs8(&ECDSA_P256_SHA256_FIXED_SIGNING, pkcs8.as_ref(), &rng)
                .map_err(|e| {
                    BlockchainError::InvalidKey(format!("Failed to create key pair from PKCS8: {e}"))
                })?;
        let public_key = key_pair.public_key().as_ref().to_vec();
        let address = derive_address(public_key.as_slice())?;
        Ok(Wallet {
            pkcs8,
            public_key,
            address,
        })
    }

    pub fn get_address(&self) -> &str {
        self.address.as_str()
    }

    pub fn get_public_key(&self) -> &[u8] {
        self.public_key.as_slice()
    }

    /// Private key (PKCS#8 document) in the hex interchange form the
    /// boundary uses.
    pub fn get_private_key_hex(&self) -> String {
        HEXLOWER.encode(self.pkcs8.as_slice())
    }

    pub fn get_public_key_hex(&self) -> String {
        HEXLOWER.encode(self.public_key.as_slice())
    }

    /// Sign a transaction record with this wallet's own private key.
    pub fn sign_transaction(&self, transaction: &Transaction) -> Result<String> {
        let digest = transaction_digest(transaction)?;
        let signature = ecdsa_p256_sha256_sign_digest(self.pkcs8.as_slice(), digest.as_slice())?;
        Ok(HEXLOWER.encode(signature.as_slice()))
    }
}

/// Derive a chain address from raw public key bytes.
///
/// Pipeline: SHA-256 of the key, RIPEMD-160 of that digest, prepend the
/// network version byte, append the first four bytes of the double SHA-256
/// of the tagged payload as a checksum, base58-encode the result. One-way
/// and bit-exact: equal key bytes always yield the identical address string.
pub fn derive_address(public_key: &[u8]) -> Result<String> {
    if public_key.len() != PUBLIC_KEY_LEN {
        return Err(BlockchainError::MalformedKey(format!(
            "Expected {PUBLIC_KEY_LEN} public key bytes, got {}",
            public_key.len()
        )));
    }

    let pub_key_hash = hash_pub_key(public_key);
    let mut payload: Vec<u8> = vec![];
    payload.push(VERSION);
    payload.extend(pub_key_hash.as_slice());
    let checksum = checksum(payload.as_slice());
    payload.extend(checksum.as_slice());
    // version + pub_key_hash + checksum
    Ok(base58_encode(payload.as_slice()))
}

pub fn hash_pub_key(pub_key: &[u8]) -> Vec<u8> {
    let pub_key_sha256 = sha256_digest(pub_key);
    ripemd160_digest(pub_key_sha256.as_slice())
}

fn checksum(payload: &[u8]) -> Vec<u8> {
    let first_sha = sha256_digest(payload);
    let second_sha = sha256_digest(first_sha.as_slice());
    second_sha[0..ADDRESS_CHECK_SUM_LEN].to_vec()
}

/// Checksum-verifying address check.
pub fn validate_address(address: &str) -> bool {
    let payload = match base58_decode(address) {
        Ok(payload) => payload,
        Err(_) => return false,
    };

    if payload.len() < ADDRESS_CHECK_SUM_LEN + 1 {
        return false;
    }

    let actual_checksum = payload[payload.len() - ADDRESS_CHECK_SUM_LEN..].to_vec();
    let target_checksum = checksum(&payload[..payload.len() - ADDRESS_CHECK_SUM_LEN]);
    actual_checksum.eq(target_checksum.as_slice())
}

/// SHA-256 digest of the canonically encoded transaction record; this is
/// the message bytes that detached signatures commit to.
pub fn transaction_digest(transaction: &Transaction) -> Result<Vec<u8>> {
    let encoded = to_canonical_json(transaction)?;
    Ok(sha256_digest(encoded.as_slice()))
}

/// Produce a detached hex signature over a transaction record.
///
/// The private key arrives in its hex interchange form; undecodable hex is
/// a `MalformedKey` error, hex that decodes but is not a usable PKCS#8
/// document is `InvalidKey`.
pub fn sign_transaction(transaction: &Transaction, private_key_hex: &str) -> Result<String> {
    let pkcs8 = HEXLOWER_PERMISSIVE
        .decode(private_key_hex.as_bytes())
        .map_err(|e| BlockchainError::MalformedKey(format!("Private key is not valid hex: {e}")))?;

    let digest = transaction_digest(transaction)?;
    let signature = ecdsa_p256_sha256_sign_digest(pkcs8.as_slice(), digest.as_slice())?;
    Ok(HEXLOWER.encode(signature.as_slice()))
}

/// Check a detached hex signature against public key bytes and message
/// bytes. Undecodable signature hex is an error; a well-formed signature
/// that does not match is simply `false`.
pub fn verify_signature(
    public_key: &[u8],
    message: &[u8],
    signature_hex: &str,
) -> Result<bool> {
    let signature = HEXLOWER_PERMISSIVE
        .decode(signature_hex.as_bytes())
        .map_err(|e| {
            BlockchainError::InvalidSignatureEncoding(format!("Signature is not valid hex: {e}"))
        })?;

    Ok(ecdsa_p256_sha256_sign_verify(
        public_key,
        signature.as_slice(),
        message,
    ))
}
