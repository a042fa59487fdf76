//! Chain integration tests
//!
//! End-to-end flows across the wallet and chain engines: the wallet derives
//! an address, the chain credits it through mining, and detached signatures
//! verify against the wallet's public key.

use scholar_chain::{
    parse_amount, transaction_digest, validate_address, verify_signature, Blockchain,
    ProofOfWork, Settings, Transaction, Wallet, MINING_REWARD, MINING_SENDER,
};

const EMPTY_MAPPING_HASH: &str =
    "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a";

fn fast_settings() -> Settings {
    Settings::new().with_difficulty(1)
}

#[test]
fn test_wallet_funds_flow_through_the_chain() {
    let miner = Wallet::new().unwrap();
    let recipient = Wallet::new().unwrap();
    assert!(validate_address(miner.get_address()));

    let mut blockchain =
        Blockchain::with_settings(Some(miner.get_address().to_string()), &fast_settings())
            .unwrap();

    // Mine once so the miner has a reward to spend
    blockchain.mine().unwrap();
    assert_eq!(blockchain.calculate_balance(miner.get_address()), MINING_REWARD);

    // The wallet signs a transfer; the boundary caller verifies it before
    // submitting (the chain itself does not check signatures)
    let transfer = Transaction::new(miner.get_address(), recipient.get_address(), 0.5);
    let signature = miner.sign_transaction(&transfer).unwrap();
    let message = transaction_digest(&transfer).unwrap();
    assert!(verify_signature(miner.get_public_key(), &message, &signature).unwrap());

    blockchain.add_transaction(transfer.get_sender(), transfer.get_recipient(), transfer.get_value());
    blockchain.mine().unwrap();

    assert_eq!(blockchain.calculate_balance(recipient.get_address()), 0.5);
    assert_eq!(
        blockchain.calculate_balance(miner.get_address()),
        2.0 * MINING_REWARD - 0.5
    );
}

#[test]
fn test_chain_links_and_proofs_hold_over_several_rounds() {
    let mut blockchain =
        Blockchain::with_settings(Some("miner".to_string()), &fast_settings()).unwrap();

    blockchain.add_transaction("A", "B", 1.0);
    blockchain.mine().unwrap();
    blockchain.add_transaction("C", "D", 2.0);
    blockchain.add_transaction("X", "Y", 3.0);
    blockchain.mine().unwrap();

    let chain = blockchain.get_chain();
    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0].get_previous_hash(), EMPTY_MAPPING_HASH);

    // Every non-genesis block links to its parent's recomputed hash and
    // satisfies the difficulty predicate for its own contents
    for i in 1..chain.len() {
        assert_eq!(chain[i].get_previous_hash(), chain[i - 1].hash().unwrap());
        assert!(ProofOfWork::valid_proof(
            chain[i].get_transactions(),
            chain[i].get_previous_hash(),
            chain[i].get_nonce(),
            blockchain.get_difficulty(),
        )
        .unwrap());
    }
}

#[test]
fn test_mining_includes_pending_records_plus_one_reward() {
    let mut blockchain =
        Blockchain::with_settings(Some("miner".to_string()), &fast_settings()).unwrap();

    blockchain.add_transaction("A", "B", 1.0);
    blockchain.add_transaction("C", "D", 2.0);
    blockchain.mine().unwrap();

    let mined = &blockchain.get_chain()[1];
    let rewards: Vec<_> = mined
        .get_transactions()
        .iter()
        .filter(|tx| tx.get_sender() == MINING_SENDER)
        .collect();

    assert_eq!(mined.get_transactions().len(), 3);
    assert_eq!(rewards.len(), 1);
    assert_eq!(rewards[0].get_value(), MINING_REWARD);
    assert!(blockchain.get_transaction_pool().is_empty());
}

#[test]
fn test_wire_representation_of_the_chain() {
    let mut blockchain =
        Blockchain::with_settings(Some("miner".to_string()), &fast_settings()).unwrap();
    blockchain.add_transaction("A", "B", 1.0);
    blockchain.mine().unwrap();

    let serialized = serde_json::to_value(blockchain.get_chain()).unwrap();
    let blocks = serialized.as_array().unwrap();
    assert_eq!(blocks.len(), 2);

    for block in blocks {
        let object = block.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(object["timestamp"].is_f64());
        assert!(object["transactions"].is_array());
        assert!(object["nonce"].is_u64());
        assert!(object["previous_hash"].is_string());
    }

    let transfer = &blocks[1]["transactions"][0];
    assert_eq!(transfer["sender_blockchain_address"], "A");
    assert_eq!(transfer["recipient_blockchain_address"], "B");
    assert_eq!(transfer["value"], 1.0);
}

#[test]
fn test_malformed_amount_is_rejected_before_any_mutation() {
    let mut blockchain =
        Blockchain::with_settings(Some("miner".to_string()), &fast_settings()).unwrap();

    // The boundary coerces text amounts before touching the pool
    let parsed = parse_amount("one point five");
    assert!(parsed.is_err());
    assert!(blockchain.get_transaction_pool().is_empty());

    let value = parse_amount("1.5").unwrap();
    assert!(blockchain.add_transaction("A", "B", value));
    assert_eq!(blockchain.get_transaction_pool().len(), 1);
}
