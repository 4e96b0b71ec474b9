use super::Decimal;

/// An immutable log entry describing one balance-affecting event.
///
/// A successful transfer appends a `Transfer` entry to the sender and a
/// matching `Received` entry to the recipient, both carrying the same
/// amount and each naming the counterpart account.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionRecord {
    Deposit { amount: Decimal },
    Withdrawal { amount: Decimal },
    Transfer { amount: Decimal, to: String },
    Received { amount: Decimal, from: String },
}

impl TransactionRecord {
    /// Returns the (always positive) amount moved by this event
    pub fn amount(&self) -> Decimal {
        match self {
            TransactionRecord::Deposit { amount }
            | TransactionRecord::Withdrawal { amount }
            | TransactionRecord::Transfer { amount, .. }
            | TransactionRecord::Received { amount, .. } => *amount,
        }
    }

    /// Returns the counterpart account's name for transfer-type entries
    pub fn counterparty(&self) -> Option<&str> {
        match self {
            TransactionRecord::Transfer { to, .. } => Some(to),
            TransactionRecord::Received { from, .. } => Some(from),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionRecord::Deposit { amount } => {
                write!(f, "[deposit] amount={amount}")
            }
            TransactionRecord::Withdrawal { amount } => {
                write!(f, "[withdrawal] amount={amount}")
            }
            TransactionRecord::Transfer { amount, to } => {
                write!(f, "[transfer] amount={amount} to={to}")
            }
            TransactionRecord::Received { amount, from } => {
                write!(f, "[received] amount={amount} from={from}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_accessor_covers_all_variants() {
        let records = [
            TransactionRecord::Deposit { amount: dec!(1) },
            TransactionRecord::Withdrawal { amount: dec!(2) },
            TransactionRecord::Transfer {
                amount: dec!(3),
                to: "Jane Doe".to_string(),
            },
            TransactionRecord::Received {
                amount: dec!(4),
                from: "John Doe".to_string(),
            },
        ];
        let amounts: Vec<_> = records.iter().map(TransactionRecord::amount).collect();
        assert_eq!(amounts, [dec!(1), dec!(2), dec!(3), dec!(4)]);
    }

    #[test]
    fn test_counterparty_only_on_transfer_entries() {
        assert_eq!(
            TransactionRecord::Deposit { amount: dec!(1) }.counterparty(),
            None
        );
        assert_eq!(
            TransactionRecord::Transfer {
                amount: dec!(1),
                to: "Jane Doe".to_string(),
            }
            .counterparty(),
            Some("Jane Doe")
        );
        assert_eq!(
            TransactionRecord::Received {
                amount: dec!(1),
                from: "John Doe".to_string(),
            }
            .counterparty(),
            Some("John Doe")
        );
    }

    #[test]
    fn test_display_names_the_event() {
        let record = TransactionRecord::Transfer {
            amount: dec!(300),
            to: "Jane Doe".to_string(),
        };
        assert_eq!(record.to_string(), "[transfer] amount=300 to=Jane Doe");
    }
}
