//! Script runner
//!
//! Replays a ledger script through a [`Bank`] and writes the resulting
//! account summary. It only orchestrates:
//! - CSV parsing is delegated to `ScriptReader`
//! - Business rules live in `Bank` and the domain types
//! - Output goes through `csv_format`
//!
//! Rejected commands are logged and skipped; only failing to read the script
//! or to write the output stops a run.

use crate::core::{Bank, BankConfig};
use crate::io::csv_format::{write_accounts_csv, write_statements_csv, Command};
use crate::io::script_reader::ScriptReader;
use crate::types::{BankError, Transaction, TransactionKind};
use std::io::Write;
use std::path::Path;

/// Outcome counters of a script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Commands that ran successfully
    pub applied: usize,

    /// Transactions refused by an account's rules
    pub rejected: usize,

    /// Commands naming an unknown, duplicate or malformed client or account
    pub failed: usize,

    /// Rows that could not be parsed into a command
    pub malformed: usize,
}

/// Runs ledger scripts against a fresh bank
#[derive(Debug, Clone, Default)]
pub struct ScriptRunner {
    config: BankConfig,
    statements: bool,
}

impl ScriptRunner {
    pub fn new(config: BankConfig) -> Self {
        ScriptRunner {
            config,
            statements: false,
        }
    }

    /// Also write every account's history after the summary
    pub fn with_statements(mut self, statements: bool) -> Self {
        self.statements = statements;
        self
    }

    /// Run the script at `input_path` and write the results to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be opened or the output cannot
    /// be written. Per-command failures are logged and counted in the report.
    pub fn run(&self, input_path: &Path, output: &mut dyn Write) -> Result<RunReport, BankError> {
        let mut bank = Bank::with_config(self.config.clone());
        let mut report = RunReport::default();

        let reader = ScriptReader::new(input_path)?;

        for result in reader {
            match result {
                Ok(command) => match execute(&mut bank, command) {
                    Ok(()) => report.applied += 1,
                    Err(e) if e.is_rejection() => {
                        tracing::warn!("Transaction rejected: {}", e);
                        report.rejected += 1;
                    }
                    Err(e) => {
                        tracing::warn!("Command failed: {}", e);
                        report.failed += 1;
                    }
                },
                Err(e) => {
                    tracing::warn!("Script parsing error: {}", e);
                    report.malformed += 1;
                }
            }
        }

        let accounts = bank.accounts();
        write_accounts_csv(&accounts, output)?;

        if self.statements {
            writeln!(output)?;
            write_statements_csv(&accounts, output)?;
        }

        tracing::info!(
            applied = report.applied,
            rejected = report.rejected,
            failed = report.failed,
            malformed = report.malformed,
            accounts = accounts.len(),
            "script processed"
        );

        Ok(report)
    }
}

/// Run a single command against the bank
pub fn execute(bank: &mut Bank, command: Command) -> Result<(), BankError> {
    match command {
        Command::NewClient {
            identity,
            name,
            birth_date,
            address,
        } => {
            bank.create_client(&identity, &name, &birth_date, &address)?;
        }
        Command::NewAccount { identity } => {
            let number = bank.open_checking_account(&identity)?;
            if let Some(listing) = bank.find_client(&identity)?.account_listing(number) {
                tracing::info!("Account opened\n{}", listing);
            }
        }
        Command::Transaction {
            kind,
            identity,
            account,
            amount,
        } => {
            let transaction = match kind {
                TransactionKind::Deposit => Transaction::deposit(amount),
                TransactionKind::Withdrawal => Transaction::withdrawal(amount),
            };
            bank.apply(&identity, account, transaction)?;
        }
    }

    Ok(())
}
