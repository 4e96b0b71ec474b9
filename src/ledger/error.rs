use crate::ledger::account::AccountId;
use crate::ledger::command::CommandRecord;
use crate::ledger::Decimal;

/// Top-level error type for the ledger.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors during `CommandRecord` -> `Command` conversion (hard errors).
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid command: {0}")]
    InvalidCommand(CommandRecord),
}

/// Soft errors during command application.
/// These don't stop batch processing, we log and continue.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Account {account} not found")]
    AccountNotFound { account: AccountId },

    #[error("Deposit of {amount} refused for account {account}: amount must be positive")]
    DepositRefused { account: AccountId, amount: Decimal },

    #[error("Withdrawal of {amount} refused for account {account} (balance {balance})")]
    WithdrawalRefused {
        account: AccountId,
        balance: Decimal,
        amount: Decimal,
    },

    #[error("Transfer of {amount} from account {from} to account {to} refused (balance {balance})")]
    TransferRefused {
        from: AccountId,
        to: AccountId,
        balance: Decimal,
        amount: Decimal,
    },

    #[error("Account {account} cannot transfer to itself")]
    SelfTransfer { account: AccountId },
}
