//! Types module
//!
//! Contains the domain model of the ledger:
//! - `transaction`: Transaction kinds and the apply-then-record protocol
//! - `history`: Append-only per-account history
//! - `account`: Accounts and the checking account policy
//! - `client`: Clients and validated identities
//! - `error`: Error types for the ledger

pub mod account;
pub mod client;
pub mod error;
pub mod history;
pub mod transaction;

pub use account::{Account, AccountKind, DEFAULT_MAX_WITHDRAWALS, DEFAULT_WITHDRAWAL_LIMIT};
pub use client::{AccountListing, Client, Identity};
pub use error::BankError;
pub use history::{History, HistoryEntry};
pub use transaction::{AccountNumber, Transaction, TransactionKind};
