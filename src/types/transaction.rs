//! Transaction-related types for the banking ledger
//!
//! A [`Transaction`] is an immutable request to move money into or out of an
//! account. Applying it follows one fixed sequence: the account validates and
//! mutates its balance, and only when that succeeds is an entry appended to
//! the account's history.

use super::account::Account;
use super::error::BankError;
use super::history::HistoryEntry;
use rust_decimal::Decimal;
use std::fmt;

/// Account number
///
/// Assigned sequentially by the bank, starting at 1.
pub type AccountNumber = u32;

/// Kinds of monetary movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires a sufficient balance and, on checking accounts, passes the
    /// withdrawal ceiling and withdrawal count checks.
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A single deposit or withdrawal
///
/// The amount is not validated on construction; the account rejects
/// non-positive amounts when the transaction is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
}

impl Transaction {
    /// Create a deposit of `amount`
    pub fn deposit(amount: Decimal) -> Self {
        Transaction {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    /// Create a withdrawal of `amount`
    pub fn withdrawal(amount: Decimal) -> Self {
        Transaction {
            kind: TransactionKind::Withdrawal,
            amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Apply the transaction to an account
    ///
    /// Runs the account's deposit or withdrawal logic and, if it succeeds,
    /// records the movement in the account's history with the current time.
    ///
    /// # Returns
    ///
    /// * `Ok(HistoryEntry)` - The entry that was appended to the history
    /// * `Err(BankError)` - The account rejected the movement; nothing was recorded
    pub fn apply(&self, account: &mut Account) -> Result<HistoryEntry, BankError> {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw(self.amount)?,
        }

        let entry = account.history_mut().record(self.kind, self.amount);

        tracing::debug!(
            account = account.number(),
            kind = %self.kind,
            amount = %self.amount,
            balance = %account.balance(),
            "transaction recorded"
        );

        Ok(entry)
    }
}
