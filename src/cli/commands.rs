pub(crate) use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bank-ledger",
    author,
    version,
    about = "A minimal in-memory bank ledger",
    long_about = None,
    after_help = "OUTPUT:\n    Final account balances are printed to stdout in CSV format.\n    Use shell redirection to save to a file:\n\n    bank-ledger session.csv > balances.csv"
)]
pub struct Args {
    /// Path to the input command CSV file
    #[arg(
        index = 1,
        value_name = "FILE",
        help = "Input CSV file with columns: op, account, name, to, amount"
    )]
    pub input_file: PathBuf,
}
