//! Banking Ledger Library
//! # Overview
//!
//! This library provides a minimal in-memory banking ledger: clients, their
//! checking accounts, and the deposits and withdrawals applied to them.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Domain types (Client, Account, Transaction, History, errors)
//! - [`core`] - Ledger components:
//!   - [`core::bank`] - Context object exposing every operation
//!   - [`core::registry`] - Client directory keyed by identity
//!   - [`core::statement`] - Account statements
//!   - [`core::config`] - Account policy configuration
//! - [`io`] - CSV script parsing and summary output
//! - [`runner`] - Replays a script through a bank
//! - [`cli`] - CLI arguments parsing
//!
//! # Transactions
//!
//! - **Deposit**: Credit a positive amount to an account
//! - **Withdrawal**: Debit a positive amount not exceeding the balance
//!
//! Checking accounts additionally cap each withdrawal (500 by default) and the
//! number of withdrawals over the account's lifetime (3 by default).
//!
//! A transaction is recorded in the account history only when it succeeds;
//! a failed transaction changes nothing.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use crate::core::{Bank, BankConfig, Registry, Statement};
pub use io::{write_accounts_csv, write_statements_csv};
pub use runner::{RunReport, ScriptRunner};
pub use types::{
    Account, AccountKind, AccountListing, AccountNumber, BankError, Client, History, HistoryEntry,
    Identity, Transaction, TransactionKind,
};
