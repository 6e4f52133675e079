//! Error types for the banking ledger
//!
//! This module defines all error types that can occur while operating on
//! clients, accounts and their transactions.
//!
//! # Error Categories
//!
//! - **Amount Errors**: Non-positive amounts, insufficient funds
//! - **Policy Errors**: Checking account withdrawal ceiling and withdrawal count cap
//! - **Directory Errors**: Unknown or duplicate identities, malformed identities
//! - **Script Errors**: File I/O and CSV parsing problems in the scripted driver
//!
//! Every variant is recoverable: a failed operation leaves balances and
//! histories exactly as they were.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Amount is zero or negative
    #[error("Invalid amount {amount} for {operation}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
        /// Operation that was attempted
        operation: String,
    },

    /// Withdrawal amount exceeds the current balance
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: u32,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal amount exceeds the per-withdrawal ceiling of a checking account
    #[error("Withdrawal of {requested} from account {account} exceeds the limit of {limit}")]
    LimitExceeded {
        /// Account number
        account: u32,
        /// Per-withdrawal ceiling
        limit: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Maximum number of withdrawals reached for a checking account
    ///
    /// The count covers the whole history of the account, it is never reset.
    #[error("Account {account} reached the maximum of {max} withdrawals")]
    DailyCountExceeded {
        /// Account number
        account: u32,
        /// Withdrawal cap
        max: usize,
    },

    /// No client registered with the identity
    #[error("Client {identity} not found")]
    NotFound {
        /// Identity that was looked up
        identity: String,
    },

    /// A client with the identity is already registered
    #[error("A client with identity {identity} already exists")]
    DuplicateIdentity {
        /// Identity that is already in use
        identity: String,
    },

    /// Identity is not exactly 11 numeric digits
    #[error("Invalid identity '{identity}': expected exactly 11 digits")]
    InvalidIdentityFormat {
        /// The malformed identity string
        identity: String,
    },

    /// Account number does not belong to the client
    #[error("Account {account} not found for client {identity}")]
    AccountNotFound {
        /// Account number that was requested
        account: u32,
        /// Identity of the client
        identity: String,
    },

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation} on account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: u32,
    },

    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown script operation
    #[error("Invalid operation '{op}'")]
    InvalidOperation {
        /// The unknown operation string
        op: String,
    },

    /// A field required by the script operation is missing
    #[error("{op} requires the '{field}' field")]
    MissingField {
        /// Script operation
        op: String,
        /// Name of the missing column
        field: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal, operation: &str) -> Self {
        BankError::InvalidAmount {
            amount,
            operation: operation.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: u32, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(account: u32, limit: Decimal, requested: Decimal) -> Self {
        BankError::LimitExceeded {
            account,
            limit,
            requested,
        }
    }

    /// Create a DailyCountExceeded error
    pub fn daily_count_exceeded(account: u32, max: usize) -> Self {
        BankError::DailyCountExceeded { account, max }
    }

    /// Create a NotFound error
    pub fn not_found(identity: &str) -> Self {
        BankError::NotFound {
            identity: identity.to_string(),
        }
    }

    /// Create a DuplicateIdentity error
    pub fn duplicate_identity(identity: &str) -> Self {
        BankError::DuplicateIdentity {
            identity: identity.to_string(),
        }
    }

    /// Create an InvalidIdentityFormat error
    pub fn invalid_identity_format(identity: &str) -> Self {
        BankError::InvalidIdentityFormat {
            identity: identity.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: u32, identity: &str) -> Self {
        BankError::AccountNotFound {
            account,
            identity: identity.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: u32) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation(op: &str) -> Self {
        BankError::InvalidOperation { op: op.to_string() }
    }

    /// Create a MissingField error
    pub fn missing_field(op: &str, field: &str) -> Self {
        BankError::MissingField {
            op: op.to_string(),
            field: field.to_string(),
        }
    }

    /// Whether the error was raised by the business rules of an account,
    /// as opposed to lookups or script handling
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            BankError::InvalidAmount { .. }
                | BankError::InsufficientFunds { .. }
                | BankError::LimitExceeded { .. }
                | BankError::DailyCountExceeded { .. }
                | BankError::ArithmeticOverflow { .. }
        )
    }
}
