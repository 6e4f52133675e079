//! Account statements
//!
//! A [`Statement`] is a read-only snapshot of an account's history and
//! balance, used for display.

use crate::types::{Account, AccountNumber, HistoryEntry};
use rust_decimal::Decimal;
use std::fmt;

/// Snapshot of an account's history and current balance
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub account: AccountNumber,
    pub branch: String,
    pub entries: Vec<HistoryEntry>,
    pub balance: Decimal,
}

impl Statement {
    pub fn for_account(account: &Account) -> Self {
        Statement {
            account: account.number(),
            branch: account.branch().to_string(),
            entries: account.history().entries().to_vec(),
            balance: account.balance(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch: {}", self.branch)?;
        writeln!(f, "Account: {}", self.account)?;

        if self.entries.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }

        for entry in &self.entries {
            writeln!(
                f,
                "{} - {:.2} - {}",
                entry.kind,
                entry.amount,
                entry.formatted_timestamp()
            )?;
        }

        write!(f, "Balance: {:.2}", self.balance)
    }
}
