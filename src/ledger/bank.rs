use std::io::{Read, Write};

use super::account::{Account, AccountId};
use super::command::{Command, CommandRecord};
use super::error::{Error, ProcessingError};
use super::Decimal;

/// A container and factory for accounts.
///
/// The bank owns its accounts in creation order and is the only way to
/// create one. It also acts as the neutral coordinator for transfers
/// between two of its accounts, taking exclusive access to both before
/// mutating either.
#[derive(Debug, Default)]
pub struct Bank {
    /// Accounts in creation order; an [`AccountId`] is an index in here
    accounts: Vec<Account>,
}

impl Bank {
    /// Create a new `Bank` with no accounts
    pub fn new() -> Self {
        log::trace!("Bank initialized");
        Self {
            accounts: Vec::new(),
        }
    }

    /// Open a new account with the given name and initial deposit and
    /// return its id. A negative initial deposit is clamped to zero.
    /// Always succeeds; names are not required to be unique.
    pub fn create_account(&mut self, name: impl Into<String>, initial_deposit: Decimal) -> AccountId {
        let account = Account::new(name, initial_deposit);
        let id = self.accounts.len();
        log::debug!(
            "Opened account {id} for {} with balance {}",
            account.name(),
            account.balance()
        );
        self.accounts.push(account);
        id
    }

    /// Returns the account with the given id, if it exists
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Returns mutable access to the account with the given id, for
    /// invoking its deposit/withdraw operations directly
    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Returns all accounts in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Returns the number of accounts in the bank
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Transfer `amount` between two of this bank's accounts.
    ///
    /// Returns `false` when either id is unknown, when `from == to`
    /// (self-transfers are rejected), or when the amount is not
    /// withdrawal-valid for the sender. On failure neither account changes.
    pub fn transfer(&mut self, from: AccountId, to: AccountId, amount: Decimal) -> bool {
        match self.pair_mut(from, to) {
            Some((sender, recipient)) => sender.transfer(amount, recipient),
            None => false,
        }
    }

    /// Split-borrow two distinct accounts.
    /// Returns `None` if the ids alias or either is out of range.
    fn pair_mut(
        &mut self,
        from: AccountId,
        to: AccountId,
    ) -> Option<(&mut Account, &mut Account)> {
        if from == to || from >= self.accounts.len() || to >= self.accounts.len() {
            return None;
        }
        if from < to {
            let (head, tail) = self.accounts.split_at_mut(to);
            Some((&mut head[from], &mut tail[0]))
        } else {
            let (head, tail) = self.accounts.split_at_mut(from);
            Some((&mut tail[0], &mut head[to]))
        }
    }

    /// Primary batch API: apply a command script from any source (File, `TcpStream`, etc.)
    /// Note that the CSV reader is buffered automatically, so you should not wrap rdr in a buffered reader like `io::BufReader`.
    pub fn process_commands<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        log::info!("Starting command processing");

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All) // trim whitespace from fields
            .from_reader(reader);

        let mut processed = 0u64;
        let mut skipped = 0u64;

        for result in csv_reader.deserialize() {
            // Step 1: Parse CSV record into raw dirty CommandRecord
            let record: CommandRecord = result?;

            let row_num = processed + skipped + 1;
            log::trace!("[row {row_num}] Parsing: {record}");

            // Step 2: Convert raw dirty CommandRecord into validated Command
            let command = Command::try_from(record)?;

            // Step 3: Apply validated Command
            if let Err(e) = self.apply_command(command) {
                log::warn!("[row {row_num}] - Skipped: {e}");
                skipped += 1;
            } else {
                processed += 1;
            }
        }

        log::info!(
            "Processing complete: {} processed, {} skipped, {} accounts",
            processed,
            skipped,
            self.accounts.len()
        );
        Ok(())
    }

    /// Secondary API: Write final state to any sink (Stdout, File, `TcpStream`, etc.)
    /// Note that the CSV writer is buffered automatically, so you should not wrap wtr in a buffered writer like `io::BufWriter`.
    pub fn export_accounts<W: Write>(&self, writer: W) -> Result<(), Error> {
        log::info!("Exporting {} accounts", self.accounts.len());

        let mut csv_writer = csv::Writer::from_writer(writer);
        for account in &self.accounts {
            csv_writer.serialize(account)?;
        }
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }

    fn apply_command(&mut self, command: Command) -> Result<(), ProcessingError> {
        log::trace!("Applying command: {command}");
        match command {
            Command::Open { name, initial } => {
                self.create_account(name, initial);
                Ok(())
            }
            Command::Deposit { account, amount } => self.handle_deposit(account, amount),
            Command::Withdraw { account, amount } => self.handle_withdraw(account, amount),
            Command::Transfer { from, to, amount } => self.handle_transfer(from, to, amount),
        }
    }
}

// =============================================================================
// Command Handlers
// =============================================================================

impl Bank {
    fn handle_deposit(&mut self, id: AccountId, amount: Decimal) -> Result<(), ProcessingError> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or(ProcessingError::AccountNotFound { account: id })?;

        if !account.deposit(amount) {
            return Err(ProcessingError::DepositRefused {
                account: id,
                amount,
            });
        }

        log::trace!(
            "[deposit] account={} amount={} -> new_balance={}",
            id,
            amount,
            account.balance()
        );
        Ok(())
    }

    fn handle_withdraw(&mut self, id: AccountId, amount: Decimal) -> Result<(), ProcessingError> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or(ProcessingError::AccountNotFound { account: id })?;

        let balance = account.balance();
        if !account.withdraw(amount) {
            return Err(ProcessingError::WithdrawalRefused {
                account: id,
                balance,
                amount,
            });
        }

        log::trace!(
            "[withdraw] account={} amount={} -> new_balance={}",
            id,
            amount,
            account.balance()
        );
        Ok(())
    }

    fn handle_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), ProcessingError> {
        if from == to {
            return Err(ProcessingError::SelfTransfer { account: from });
        }
        if from >= self.accounts.len() {
            return Err(ProcessingError::AccountNotFound { account: from });
        }
        if to >= self.accounts.len() {
            return Err(ProcessingError::AccountNotFound { account: to });
        }

        let (sender, recipient) = self
            .pair_mut(from, to)
            .ok_or(ProcessingError::AccountNotFound { account: from })?;

        let balance = sender.balance();
        if !sender.transfer(amount, recipient) {
            return Err(ProcessingError::TransferRefused {
                from,
                to,
                balance,
                amount,
            });
        }

        log::trace!("[transfer] from={from} to={to} amount={amount}");
        Ok(())
    }
}
