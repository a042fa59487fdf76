use crate::core::Transaction;
use crate::error::Result;
use crate::utils::digest_hex;
use log::{debug, info};
use serde::Serialize;

/// The candidate fields a nonce commits to. Canonical encoding sorts the
/// keys, so declaration order here is irrelevant to the digest.
#[derive(Serialize)]
struct GuessBlock<'a> {
    transactions: &'a [Transaction],
    nonce: u64,
    previous_hash: &'a str,
}

/// Brute-force nonce search over a fixed transactions snapshot.
///
/// The search is a sequential scan from nonce 0 with no upper bound: at
/// high difficulty it is a liveness risk, and callers wanting bounded
/// latency must impose their own deadline around the call.
pub struct ProofOfWork {
    transactions: Vec<Transaction>,
    previous_hash: String,
    difficulty: usize,
}

impl ProofOfWork {
    pub fn new(
        transactions: Vec<Transaction>,
        previous_hash: String,
        difficulty: usize,
    ) -> ProofOfWork {
        ProofOfWork {
            transactions,
            previous_hash,
            difficulty,
        }
    }

    /// Acceptance predicate: the hex digest of the canonically encoded
    /// candidate must start with `difficulty` ASCII '0' characters.
    ///
    /// This is a textual prefix match on the hex form, not a bit-level
    /// leading-zero count; the two differ at odd bit boundaries.
    pub fn valid_proof(
        transactions: &[Transaction],
        previous_hash: &str,
        nonce: u64,
        difficulty: usize,
    ) -> Result<bool> {
        let guess = GuessBlock {
            transactions,
            nonce,
            previous_hash,
        };
        let guess_hash = digest_hex(&guess)?;
        Ok(guess_hash
            .as_bytes()
            .iter()
            .take(difficulty)
            .all(|c| *c == b'0'))
    }

    /// Scan nonces sequentially until the predicate accepts.
    ///
    /// Expected trial count is about 16^difficulty.
    pub fn run(&self) -> Result<u64> {
        info!(
            "Starting proof-of-work search at difficulty {} over {} transactions",
            self.difficulty,
            self.transactions.len()
        );

        let mut nonce: u64 = 0;
        loop {
            if Self::valid_proof(
                &self.transactions,
                &self.previous_hash,
                nonce,
                self.difficulty,
            )? {
                debug!("Proof-of-work search finished at nonce {nonce}");
                return Ok(nonce);
            }
            nonce += 1;
        }
    }
}
