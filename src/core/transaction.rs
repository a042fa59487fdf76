// A transaction is a plain value-transfer record between two addresses.
// Records carry no signature field: signing is a detached wallet-side
// operation, and the chain engine admits records without verifying one.

use serde::{Deserialize, Serialize};

/// A single value transfer, both as a pool entry and as a block entry.
///
/// Field names are part of the canonical encoding and therefore of every
/// block hash; renaming one changes the identity of every block that
/// carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    sender_blockchain_address: String,
    recipient_blockchain_address: String,
    value: f64,
}

impl Transaction {
    pub fn new(
        sender_blockchain_address: &str,
        recipient_blockchain_address: &str,
        value: f64,
    ) -> Transaction {
        Transaction {
            sender_blockchain_address: sender_blockchain_address.to_string(),
            recipient_blockchain_address: recipient_blockchain_address.to_string(),
            value,
        }
    }

    pub fn get_sender(&self) -> &str {
        self.sender_blockchain_address.as_str()
    }

    pub fn get_recipient(&self) -> &str {
        self.recipient_blockchain_address.as_str()
    }

    pub fn get_value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::to_canonical_json;

    #[test]
    fn test_getters() {
        let tx = Transaction::new("A", "B", 1.5);
        assert_eq!(tx.get_sender(), "A");
        assert_eq!(tx.get_recipient(), "B");
        assert_eq!(tx.get_value(), 1.5);
    }

    #[test]
    fn test_canonical_encoding_sorts_field_names() {
        let tx = Transaction::new("A", "B", 1.0);
        assert_eq!(
            to_canonical_json(&tx).unwrap(),
            br#"{"recipient_blockchain_address":"B","sender_blockchain_address":"A","value":1.0}"#
                .to_vec()
        );
    }

    #[test]
    fn test_wire_representation_field_names() {
        let tx = Transaction::new("A", "B", 2.0);
        let value = serde_json::to_value(&tx).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("sender_blockchain_address"));
        assert!(object.contains_key("recipient_blockchain_address"));
        assert!(object.contains_key("value"));
    }
}
