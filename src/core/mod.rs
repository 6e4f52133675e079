//! Core business logic module
//!
//! This module contains the ledger components built on top of the domain types:
//! - `config` - Account policy configuration
//! - `registry` - Client directory keyed by identity
//! - `statement` - Read-only account statements
//! - `bank` - Context object exposing every driver-facing operation

pub mod bank;
pub mod config;
pub mod registry;
pub mod statement;

pub use bank::Bank;
pub use config::BankConfig;
pub use registry::Registry;
pub use statement::Statement;
