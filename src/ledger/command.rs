use super::account::AccountId;
use super::error::CommandError;
use super::Decimal;
use serde::Deserialize;

/// Raw command record as parsed from CSV input.
/// This is the unvalidated form that needs conversion to a [`Command`].
///
/// Columns: `op,account,name,to,amount`. Which fields are required depends
/// on the op: `open` takes `name` and an optional `amount`; `deposit` and
/// `withdraw` take `account` and `amount`; `transfer` takes `account`,
/// `to`, and `amount`.
#[derive(Debug, Deserialize, Clone)]
pub struct CommandRecord {
    pub op: CommandType,
    /// Source account id (for deposit/withdraw/transfer)
    pub account: Option<AccountId>,
    /// Account holder's name (for open)
    pub name: Option<String>,
    /// Recipient account id (for transfer)
    pub to: Option<AccountId>,
    /// Amount: required for deposit/withdraw/transfer, optional for open
    pub amount: Option<Decimal>,
}

impl std::fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.op)?;
        if let Some(account) = self.account {
            write!(f, " account={account}")?;
        }
        if let Some(name) = &self.name {
            write!(f, " name={name}")?;
        }
        if let Some(to) = self.to {
            write!(f, " to={to}")?;
        }
        if let Some(amount) = self.amount {
            write!(f, " amount={amount}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Open,
    Deposit,
    Withdraw,
    Transfer,
}

impl std::fmt::Display for CommandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandType::Open => write!(f, "open"),
            CommandType::Deposit => write!(f, "deposit"),
            CommandType::Withdraw => write!(f, "withdraw"),
            CommandType::Transfer => write!(f, "transfer"),
        }
    }
}

/// A validated command ready for application by the bank.
///
/// Only the record's shape is validated here (required fields present, at
/// most 2 decimal places). Sign and funds checks stay with the account
/// operations themselves and surface as skipped commands.
#[derive(Debug, Clone)]
pub enum Command {
    Open { name: String, initial: Decimal },
    Deposit { account: AccountId, amount: Decimal },
    Withdraw { account: AccountId, amount: Decimal },
    Transfer { from: AccountId, to: AccountId, amount: Decimal },
}

impl TryFrom<CommandRecord> for Command {
    type Error = CommandError;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        match record {
            CommandRecord {
                op: CommandType::Open,
                account: None,
                name: Some(name),
                to: None,
                amount,
            } if amount.is_none_or(|a| a.scale() <= 2) => Ok(Command::Open {
                name,
                // May be negative: the account constructor clamps it.
                initial: amount.unwrap_or(Decimal::ZERO),
            }),
            CommandRecord {
                op: CommandType::Deposit,
                account: Some(account),
                name: None,
                to: None,
                amount: Some(amount),
            } if amount.scale() <= 2 => Ok(Command::Deposit { account, amount }),
            CommandRecord {
                op: CommandType::Withdraw,
                account: Some(account),
                name: None,
                to: None,
                amount: Some(amount),
            } if amount.scale() <= 2 => Ok(Command::Withdraw { account, amount }),
            CommandRecord {
                op: CommandType::Transfer,
                account: Some(from),
                name: None,
                to: Some(to),
                amount: Some(amount),
            } if amount.scale() <= 2 => Ok(Command::Transfer { from, to, amount }),
            _ => Err(CommandError::InvalidCommand(record)),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Open { name, initial } => {
                write!(f, "[open] name={name} initial={initial}")
            }
            Command::Deposit { account, amount } => {
                write!(f, "[deposit] account={account} amount={amount}")
            }
            Command::Withdraw { account, amount } => {
                write!(f, "[withdraw] account={account} amount={amount}")
            }
            Command::Transfer { from, to, amount } => {
                write!(f, "[transfer] from={from} to={to} amount={amount}")
            }
        }
    }
}
