//! A minimal in-memory bank ledger.
//!
//! A [`Bank`] owns a collection of accounts and acts as their factory.
//! Each [`Account`] holds a balance and an append-only transaction history,
//! and validates every amount before mutating state. Fallible operations
//! report failure with a `bool` rather than an error; a `false` result
//! leaves both balance and history untouched.

pub mod ledger;

pub use ledger::{Account, AccountId, Bank, TransactionRecord};
