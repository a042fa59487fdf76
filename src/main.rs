// Demo driver: builds a wallet, runs the chain through a couple of mining
// rounds, and prints the ledger. Takes no arguments; set MINING_DIFFICULTY
// or MINING_REWARD in the environment to change the node settings.

use log::{error, LevelFilter};
use scholar_chain::core::monetary::format_amount;
use scholar_chain::{
    parse_amount, transaction_digest, verify_signature, Blockchain, Settings, Transaction, Wallet,
};
use std::process;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    if let Err(e) = run() {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Wallet first, then the chain that pays it: the miner's address must
    // exist before the chain can credit rewards to it.
    let miner = Wallet::new()?;
    println!("private key  {}", miner.get_private_key_hex());
    println!("public key   {}", miner.get_public_key_hex());
    println!("address      {}", miner.get_address());
    println!();

    let settings = Settings::from_env()?;
    let mut blockchain =
        Blockchain::with_settings(Some(miner.get_address().to_string()), &settings)?;

    blockchain.add_transaction("A", "B", parse_amount("1.0")?);
    blockchain.mine()?;

    blockchain.add_transaction("C", "D", parse_amount("2.0")?);
    blockchain.add_transaction("X", "Y", parse_amount("3.0")?);
    blockchain.mine()?;

    // The wire representation of the chain, as a boundary caller would see it
    println!("{}", serde_json::to_string_pretty(blockchain.get_chain())?);
    println!();

    for address in ["B", "C", "D", miner.get_address()] {
        println!(
            "balance {:24} {}",
            address,
            format_amount(blockchain.calculate_balance(address))
        );
    }
    println!();

    // Detached signing round: sign a record, verify it against the public key
    let transfer = Transaction::new(miner.get_address(), "B", 1.0);
    let signature = miner.sign_transaction(&transfer)?;
    let message = transaction_digest(&transfer)?;
    println!("signature    {}", signature);
    println!(
        "verified     {}",
        verify_signature(miner.get_public_key(), &message, &signature)?
    );

    Ok(())
}
