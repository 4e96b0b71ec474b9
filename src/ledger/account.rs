use super::transaction::TransactionRecord;
use super::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// Index of an account within its bank's sequence. Accounts are never
/// removed, so ids stay stable for the life of the bank.
pub type AccountId = usize;

/// Serialize Decimal with exactly 2 decimal places
fn serialize_decimal_2dp<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

/// An account holding a balance and an append-only transaction history.
///
/// The balance is never negative: every mutation is gated by a private
/// validation predicate, and a rejected operation leaves both balance and
/// history untouched.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Account {
    name: String,
    #[serde(serialize_with = "serialize_decimal_2dp")]
    balance: Decimal,
    #[serde(skip)]
    history: Vec<TransactionRecord>,
}

impl Account {
    /// Accounts are only created through [`Bank::create_account`].
    /// A negative initial deposit is clamped to zero.
    ///
    /// [`Bank::create_account`]: super::Bank::create_account
    pub(super) fn new(name: impl Into<String>, initial_deposit: Decimal) -> Self {
        Self {
            name: name.into(),
            balance: initial_deposit.max(Decimal::ZERO).normalize(),
            history: Vec::new(),
        }
    }

    /// Returns the account holder's name (not guaranteed unique)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns the transaction history, oldest first
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    /// A deposit amount must be strictly positive.
    fn is_deposit_valid(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO
    }

    /// A withdrawal amount must be strictly positive and must not exceed
    /// the current balance. Draining the balance to exactly zero is valid.
    fn is_withdrawal_valid(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO && amount <= self.balance
    }

    /// Credit the account.
    /// Returns `false` without mutating state if the amount is not
    /// deposit-valid.
    pub fn deposit(&mut self, amount: Decimal) -> bool {
        if !self.is_deposit_valid(amount) {
            return false;
        }
        self.balance += amount;
        self.history.push(TransactionRecord::Deposit { amount });
        self.normalize();
        #[cfg(debug_assertions)]
        self.assert_invariant();
        true
    }

    /// Debit the account.
    /// Returns `false` without mutating state if the amount is not
    /// withdrawal-valid.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        if !self.is_withdrawal_valid(amount) {
            return false;
        }
        self.balance -= amount;
        self.history.push(TransactionRecord::Withdrawal { amount });
        self.normalize();
        #[cfg(debug_assertions)]
        self.assert_invariant();
        true
    }

    /// Move funds from this account to `recipient` as one logical operation:
    /// debit plus `Transfer` record here, credit plus `Received` record on
    /// the recipient. Validated against the sender's balance only; the
    /// recipient is not re-checked.
    ///
    /// The two exclusive borrows guarantee no observer can see the sender
    /// debited but the recipient not yet credited, and rule out aliasing.
    ///
    /// Returns `false` without mutating either account if the amount is not
    /// withdrawal-valid for the sender.
    pub fn transfer(&mut self, amount: Decimal, recipient: &mut Account) -> bool {
        if !self.is_withdrawal_valid(amount) {
            return false;
        }
        self.balance -= amount;
        self.history.push(TransactionRecord::Transfer {
            amount,
            to: recipient.name.clone(),
        });

        recipient.balance += amount;
        recipient.history.push(TransactionRecord::Received {
            amount,
            from: self.name.clone(),
        });

        self.normalize();
        recipient.normalize();
        #[cfg(debug_assertions)]
        {
            self.assert_invariant();
            recipient.assert_invariant();
        }
        true
    }

    /// Assert the fundamental invariant: the balance never goes negative.
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: account {} has negative balance ({})",
            self.name,
            self.balance
        );
    }

    /// Normalize the balance to trim trailing zeros.
    /// Keeps internal representation compact and consistent.
    fn normalize(&mut self) {
        self.balance = self.balance.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account_starts_with_initial_deposit_and_empty_history() {
        let account = Account::new("John Doe", dec!(1000));
        assert_eq!(account.name(), "John Doe");
        assert_eq!(account.balance(), dec!(1000));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_negative_initial_deposit_is_clamped_to_zero() {
        let account = Account::new("Broke", dec!(-50));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_increases_balance_and_records_transaction() {
        let mut account = Account::new("John Doe", dec!(1000));
        assert!(account.deposit(dec!(500)));

        assert_eq!(account.balance(), dec!(1500));
        assert_eq!(
            account.history(),
            &[TransactionRecord::Deposit { amount: dec!(500) }]
        );
    }

    #[test]
    fn test_deposit_of_zero_is_rejected() {
        let mut account = Account::new("John Doe", dec!(100));
        assert!(!account.deposit(Decimal::ZERO));

        assert_eq!(account.balance(), dec!(100));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_deposit_of_negative_amount_is_rejected() {
        let mut account = Account::new("John Doe", dec!(100));
        assert!(!account.deposit(dec!(-10)));

        assert_eq!(account.balance(), dec!(100));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_withdraw_decreases_balance_and_records_transaction() {
        let mut account = Account::new("John Doe", dec!(1000));
        assert!(account.withdraw(dec!(200)));

        assert_eq!(account.balance(), dec!(800));
        assert_eq!(
            account.history(),
            &[TransactionRecord::Withdrawal { amount: dec!(200) }]
        );
    }

    #[test]
    fn test_withdraw_exactly_the_balance_drains_to_zero() {
        let mut account = Account::new("John Doe", dec!(100));
        assert!(account.withdraw(dec!(100)));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_more_than_balance_is_rejected() {
        let mut account = Account::new("John Doe", dec!(100));
        assert!(!account.withdraw(dec!(100.01)));

        assert_eq!(account.balance(), dec!(100));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_withdraw_of_zero_is_rejected() {
        let mut account = Account::new("John Doe", dec!(100));
        assert!(!account.withdraw(Decimal::ZERO));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_transfer_moves_funds_and_records_both_sides() {
        let mut sender = Account::new("John Doe", dec!(1000));
        let mut recipient = Account::new("Jane Doe", dec!(500));

        assert!(sender.transfer(dec!(300), &mut recipient));

        assert_eq!(sender.balance(), dec!(700));
        assert_eq!(recipient.balance(), dec!(800));
        assert_eq!(
            sender.history(),
            &[TransactionRecord::Transfer {
                amount: dec!(300),
                to: "Jane Doe".to_string(),
            }]
        );
        assert_eq!(
            recipient.history(),
            &[TransactionRecord::Received {
                amount: dec!(300),
                from: "John Doe".to_string(),
            }]
        );
    }

    #[test]
    fn test_transfer_exceeding_balance_leaves_both_accounts_untouched() {
        let mut sender = Account::new("John Doe", dec!(100));
        let mut recipient = Account::new("Jane Doe", dec!(500));

        assert!(!sender.transfer(dec!(5000), &mut recipient));

        assert_eq!(sender.balance(), dec!(100));
        assert_eq!(recipient.balance(), dec!(500));
        assert!(sender.history().is_empty());
        assert!(recipient.history().is_empty());
    }

    #[test]
    fn test_transfer_entire_balance_is_allowed() {
        let mut sender = Account::new("John Doe", dec!(100));
        let mut recipient = Account::new("Jane Doe", Decimal::ZERO);

        assert!(sender.transfer(dec!(100), &mut recipient));
        assert_eq!(sender.balance(), Decimal::ZERO);
        assert_eq!(recipient.balance(), dec!(100));
    }

    #[test]
    fn test_transfer_into_clamped_account_is_not_revalidated() {
        let mut sender = Account::new("John Doe", dec!(100));
        // Opened with a negative deposit, clamped to zero.
        let mut recipient = Account::new("Jane Doe", dec!(-50));

        assert!(sender.transfer(dec!(40), &mut recipient));
        assert_eq!(recipient.balance(), dec!(40));
    }

    #[test]
    fn test_history_sums_reconcile_with_balance() {
        let initial = dec!(1000);
        let mut account = Account::new("John Doe", initial);
        let mut other = Account::new("Jane Doe", dec!(500));

        account.deposit(dec!(500));
        account.withdraw(dec!(200));
        account.transfer(dec!(300), &mut other);
        other.transfer(dec!(50), &mut account);

        let mut delta = Decimal::ZERO;
        for record in account.history() {
            match record {
                TransactionRecord::Deposit { amount }
                | TransactionRecord::Received { amount, .. } => delta += *amount,
                TransactionRecord::Withdrawal { amount }
                | TransactionRecord::Transfer { amount, .. } => delta -= *amount,
            }
        }
        assert_eq!(account.balance(), initial + delta);
    }

    #[test]
    fn test_normalize_trims_trailing_zeros() {
        let mut account = Account::new("John Doe", Decimal::ZERO);
        account.deposit(dec!(100.0000));

        // After normalize, should be compact
        assert_eq!(account.balance().to_string(), "100");
    }
}
