//! Client-related types for the banking ledger
//!
//! A [`Client`] owns its accounts exclusively. Accounts refer back to their
//! owner through its [`Identity`], never through a shared reference.

use super::account::Account;
use super::error::BankError;
use super::history::HistoryEntry;
use super::transaction::{AccountNumber, Transaction};
use std::fmt;

/// Number of digits in a client identity
pub const IDENTITY_LENGTH: usize = 11;

/// Client identity (CPF-style)
///
/// Always exactly 11 ASCII digits. The only way to build one is
/// [`Identity::parse`], so holding an `Identity` means the format was checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(String);

impl Identity {
    /// Parse and validate an identity string
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentityFormat` unless the input is exactly 11 digits.
    pub fn parse(input: &str) -> Result<Self, BankError> {
        let trimmed = input.trim();

        if trimmed.len() != IDENTITY_LENGTH || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BankError::invalid_identity_format(input));
        }

        Ok(Identity(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A bank client (natural person)
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    identity: Identity,
    name: String,
    birth_date: String,
    address: String,
    accounts: Vec<Account>,
}

impl Client {
    /// Create a client without accounts
    ///
    /// Uniqueness of `identity` is not checked here; the registry enforces it.
    pub fn new(identity: Identity, name: &str, birth_date: &str, address: &str) -> Self {
        Client {
            identity,
            name: name.to_string(),
            birth_date: birth_date.to_string(),
            address: address.to_string(),
            accounts: Vec::new(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Accounts in the order they were opened
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    /// Listing of one of the client's accounts, headed by the client's name
    pub fn account_listing(&self, number: AccountNumber) -> Option<AccountListing<'_>> {
        self.account(number).map(|account| AccountListing {
            holder: self,
            account,
        })
    }

    /// Add an account to the client
    ///
    /// Account numbers are unique because the bank assigns them from a single
    /// counter; no check happens here.
    pub fn open_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Apply a transaction to one of the client's own accounts
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the client owns no account with that
    /// number, otherwise whatever the transaction itself returns.
    pub fn apply_transaction(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<HistoryEntry, BankError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or_else(|| BankError::account_not_found(number, self.identity.as_str()))?;

        transaction.apply(account)
    }
}

/// An account seen together with the client holding it
#[derive(Debug, Clone, Copy)]
pub struct AccountListing<'a> {
    pub holder: &'a Client,
    pub account: &'a Account,
}

impl fmt::Display for AccountListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch: {}", self.account.branch())?;
        writeln!(f, "Account: {}", self.account.number())?;
        write!(f, "Holder: {}", self.holder.name())
    }
}
