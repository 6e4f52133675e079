//! Bank context
//!
//! This module provides the `Bank` that ties the client registry, the account
//! number sequence and the account policy together. Every operation a driver
//! needs goes through it.
//!
//! The bank enforces:
//! - Identity format validation before any client is created or looked up
//! - Identity uniqueness (through the registry)
//! - Sequential, system-wide account numbers
//! - Ownership: transactions only reach accounts of the named client

use crate::core::config::BankConfig;
use crate::core::registry::Registry;
use crate::core::statement::Statement;
use crate::types::{
    Account, AccountNumber, BankError, Client, HistoryEntry, Identity, Transaction,
};
use rust_decimal::Decimal;

/// In-memory bank
///
/// Owns all state of one ledger instance. Several instances can live side by
/// side; nothing is global.
#[derive(Debug)]
pub struct Bank {
    registry: Registry,
    config: BankConfig,
    last_account: AccountNumber,
}

impl Bank {
    /// Create an empty bank with the default account policy
    pub fn new() -> Self {
        Self::with_config(BankConfig::default())
    }

    /// Create an empty bank with a custom account policy
    pub fn with_config(config: BankConfig) -> Self {
        Bank {
            registry: Registry::new(),
            config,
            last_account: 0,
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register a new client
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The identity is not exactly 11 digits
    /// - A client with the identity is already registered
    pub fn create_client(
        &mut self,
        identity: &str,
        name: &str,
        birth_date: &str,
        address: &str,
    ) -> Result<Identity, BankError> {
        let identity = Identity::parse(identity)?;

        self.registry
            .register(Client::new(identity.clone(), name, birth_date, address))?;

        tracing::debug!(identity = %identity, "client registered");

        Ok(identity)
    }

    /// Look up a client by identity
    pub fn find_client(&self, identity: &str) -> Result<&Client, BankError> {
        let identity = Identity::parse(identity)?;
        self.registry.find(&identity)
    }

    fn find_client_mut(&mut self, identity: &str) -> Result<&mut Client, BankError> {
        let identity = Identity::parse(identity)?;
        self.registry.find_mut(&identity)
    }

    /// Open a checking account for an existing client
    ///
    /// The account gets the next number of the bank-wide sequence (the first
    /// account is 1) and the configured withdrawal policy. The sequence only
    /// advances when the account is actually opened.
    ///
    /// # Returns
    ///
    /// The number of the new account
    pub fn open_checking_account(&mut self, identity: &str) -> Result<AccountNumber, BankError> {
        let number = self
            .last_account
            .checked_add(1)
            .ok_or_else(|| BankError::arithmetic_overflow("open_account", self.last_account))?;
        let branch = self.config.branch.clone();
        let kind = self.config.checking_kind();

        let client = self.find_client_mut(identity)?;
        let owner = client.identity().clone();
        client.open_account(Account::new(number, &branch, owner, kind));

        self.last_account = number;

        tracing::debug!(identity = identity.trim(), account = number, "checking account opened");

        Ok(number)
    }

    /// Accounts of a client, in the order they were opened
    pub fn list_accounts(&self, identity: &str) -> Result<&[Account], BankError> {
        Ok(self.find_client(identity)?.accounts())
    }

    /// Deposit into one of the client's accounts
    pub fn deposit(
        &mut self,
        identity: &str,
        account: AccountNumber,
        amount: Decimal,
    ) -> Result<HistoryEntry, BankError> {
        self.apply(identity, account, Transaction::deposit(amount))
    }

    /// Withdraw from one of the client's accounts
    pub fn withdraw(
        &mut self,
        identity: &str,
        account: AccountNumber,
        amount: Decimal,
    ) -> Result<HistoryEntry, BankError> {
        self.apply(identity, account, Transaction::withdrawal(amount))
    }

    /// Apply a transaction to one of the client's accounts
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is malformed or unknown, the account
    /// does not belong to the client, or the account rejects the transaction.
    /// In every case balance and history are left untouched.
    pub fn apply(
        &mut self,
        identity: &str,
        account: AccountNumber,
        transaction: Transaction,
    ) -> Result<HistoryEntry, BankError> {
        self.find_client_mut(identity)?
            .apply_transaction(account, &transaction)
    }

    /// History and balance of one of the client's accounts
    pub fn statement(
        &self,
        identity: &str,
        account: AccountNumber,
    ) -> Result<Statement, BankError> {
        let client = self.find_client(identity)?;

        client
            .account(account)
            .map(Statement::for_account)
            .ok_or_else(|| BankError::account_not_found(account, client.identity().as_str()))
    }

    /// All accounts of all clients, sorted by account number
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self
            .registry
            .clients()
            .flat_map(|client| client.accounts().iter())
            .collect();
        accounts.sort_by_key(|account| account.number());
        accounts
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
