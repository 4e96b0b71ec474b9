//! Basic example of using the [`Bank`] ledger.
//!
//! Run with: `cargo run --example basic`

use bank_ledger::Bank;
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Sample session as CSV
    let session = r"op,account,name,to,amount
open,,John Doe,,1000
open,,Jane Doe,,500
deposit,0,,,500
withdraw,0,,,200
transfer,0,,1,300
withdraw,0,,,5000
open,,Overdrawn,,-50
";

    // Create a bank and apply the session
    let mut bank = Bank::new();
    bank.process_commands(Cursor::new(session))
        .expect("Failed to process commands");

    // Export results to stdout
    println!("\n=== Final Balances ===");
    bank.export_accounts(std::io::stdout())
        .expect("Failed to export accounts");

    // Inspect John's transaction history through the API
    println!("\n=== John's History ===");
    if let Some(john) = bank.account(0) {
        for record in john.history() {
            println!("{record}");
        }
    }
}
