//! Monetary values and mining constants for the educational blockchain.
//!
//! Amounts are plain decimal numbers. There is no smallest-unit integer
//! representation: the ledger credits and debits fractional values exactly
//! as submitted, which keeps the accounting readable for teaching purposes
//! at the cost of float arithmetic.

use crate::error::{BlockchainError, Result};

/// Reserved sender identifier for mining reward transactions.
pub const MINING_SENDER: &str = "THE BLOCKCHAIN";

/// Reward credited to the node owner on every mined block.
pub const MINING_REWARD: f64 = 1.0;

/// Number of leading '0' hex characters a block digest must carry.
pub const MINING_DIFFICULTY: usize = 3;

/// Coerce boundary text into a decimal amount.
///
/// The HTTP collaborators submit values as strings; anything that does not
/// parse to a finite number is rejected before any chain state mutates.
///
/// # Examples
/// ```
/// use scholar_chain::core::monetary::parse_amount;
/// assert_eq!(parse_amount("1.5").unwrap(), 1.5);
/// assert!(parse_amount("one and a half").is_err());
/// ```
pub fn parse_amount(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| BlockchainError::InvalidAmount(format!("Not a decimal number: {raw}")))?;

    if !value.is_finite() {
        return Err(BlockchainError::InvalidAmount(format!(
            "Not a finite amount: {raw}"
        )));
    }

    Ok(value)
}

/// Format an amount for display.
pub fn format_amount(value: f64) -> String {
    format!("{value:.1}")
}
