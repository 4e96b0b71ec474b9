//! Ledger module.
//!
//! This module contains the core bookkeeping logic including:
//! - `Bank` - Account factory, owner, and transfer coordinator
//! - `Account` - Balance and transaction history with validated operations
//! - `TransactionRecord` - Immutable log entries (deposit, withdrawal, transfer, received)
//! - `Command` types - CSV command script parsing for the batch runner
//! - `Error` types - Batch and command validation errors

mod account;
mod bank;
mod command;
mod error;
mod transaction;

pub(crate) use rust_decimal::Decimal;

pub use account::{Account, AccountId};
pub use bank::Bank;
pub use command::{Command, CommandRecord, CommandType};
pub use error::{CommandError, Error, ProcessingError};
pub use transaction::TransactionRecord;
