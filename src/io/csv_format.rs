//! CSV format handling for ledger scripts and summaries
//!
//! This module centralizes all CSV format concerns, providing:
//! - ScriptRecord structure for deserialization
//! - Conversion from script records to [`Command`]s
//! - Account summary and statement serialization
//!
//! All functions are pure (no file access) for easy testing.

use crate::types::{Account, AccountNumber, BankError, TransactionKind};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the script format with columns:
/// `op,identity,account,amount,name,birth_date,address`.
/// Every column except `op` is optional since each operation only uses a
/// subset of them.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ScriptRecord {
    pub op: String,
    pub identity: Option<String>,
    pub account: Option<String>,
    pub amount: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
}

/// One operation of a ledger script
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a client
    NewClient {
        identity: String,
        name: String,
        birth_date: String,
        address: String,
    },

    /// Open a checking account for a client
    NewAccount { identity: String },

    /// Deposit into or withdraw from a client's account
    Transaction {
        kind: TransactionKind,
        identity: String,
        account: AccountNumber,
        amount: Decimal,
    },
}

/// Return the trimmed value of a column, treating blank values as absent
fn field<'a>(value: &'a Option<String>) -> Option<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn required<'a>(value: &'a Option<String>, op: &str, name: &str) -> Result<&'a str, BankError> {
    field(value).ok_or_else(|| BankError::missing_field(op, name))
}

/// Convert a ScriptRecord to a Command
///
/// This function:
/// - Parses the operation name (case-insensitive)
/// - Checks the columns required by the operation are present
/// - Parses the account number and amount
///
/// The identity string is passed through unvalidated; the bank checks its
/// format when the command runs.
pub fn convert_script_record(record: ScriptRecord) -> Result<Command, BankError> {
    let op = record.op.trim().to_lowercase();

    match op.as_str() {
        "new_client" => Ok(Command::NewClient {
            identity: required(&record.identity, &op, "identity")?.to_string(),
            name: required(&record.name, &op, "name")?.to_string(),
            birth_date: field(&record.birth_date).unwrap_or_default().to_string(),
            address: field(&record.address).unwrap_or_default().to_string(),
        }),
        "new_account" => Ok(Command::NewAccount {
            identity: required(&record.identity, &op, "identity")?.to_string(),
        }),
        "deposit" | "withdraw" | "withdrawal" => {
            let kind = if op == "deposit" {
                TransactionKind::Deposit
            } else {
                TransactionKind::Withdrawal
            };

            let identity = required(&record.identity, &op, "identity")?.to_string();

            let account_str = required(&record.account, &op, "account")?;
            let account = account_str.parse::<AccountNumber>().map_err(|_| {
                BankError::ParseError {
                    line: None,
                    message: format!("Invalid account number '{}'", account_str),
                }
            })?;

            let amount_str = required(&record.amount, &op, "amount")?;
            let amount = Decimal::from_str(amount_str).map_err(|_| BankError::ParseError {
                line: None,
                message: format!("Invalid amount '{}'", amount_str),
            })?;

            Ok(Command::Transaction {
                kind,
                identity,
                account,
                amount,
            })
        }
        _ => Err(BankError::invalid_operation(record.op.trim())),
    }
}

/// Write the account summary in CSV format
///
/// Columns: `branch,account,client,balance,withdrawals,transactions`.
/// Accounts are written sorted by account number; balances use 2 decimal
/// places.
pub fn write_accounts_csv(accounts: &[&Account], output: &mut dyn Write) -> Result<(), BankError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record([
        "branch",
        "account",
        "client",
        "balance",
        "withdrawals",
        "transactions",
    ])?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.number());

    for account in sorted_accounts {
        writer.write_record(&[
            account.branch().to_string(),
            account.number().to_string(),
            account.owner().to_string(),
            format!("{:.2}", account.balance()),
            account
                .history()
                .count(TransactionKind::Withdrawal)
                .to_string(),
            account.history().len().to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write every account's history in CSV format
///
/// Columns: `account,kind,amount,timestamp`, one row per history entry, in
/// account-number order and then chronological order.
pub fn write_statements_csv(
    accounts: &[&Account],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["account", "kind", "amount", "timestamp"])?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.number());

    for account in sorted_accounts {
        for entry in account.history().iter() {
            writer.write_record(&[
                account.number().to_string(),
                entry.kind.to_string().to_lowercase(),
                format!("{:.2}", entry.amount),
                entry.formatted_timestamp(),
            ])?;
        }
    }

    writer.flush()?;

    Ok(())
}
