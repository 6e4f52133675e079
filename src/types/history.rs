//! Per-account transaction history
//!
//! The history is an append-only log of the successful movements on one
//! account. Insertion order is chronological order; entries are never
//! removed or reordered.

use super::transaction::TransactionKind;
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

/// Timestamp format used when displaying history entries
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A recorded movement
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Deposit or withdrawal
    pub kind: TransactionKind,

    /// Amount that was moved
    pub amount: Decimal,

    /// Local time at which the movement was applied
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Local>) -> Self {
        HistoryEntry {
            kind,
            amount,
            timestamp,
        }
    }

    /// Timestamp rendered as `dd-mm-YYYY HH:MM:SS`
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Append-only log of an account's successful transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    /// Record a movement stamped with the current local time
    pub(crate) fn record(&mut self, kind: TransactionKind, amount: Decimal) -> HistoryEntry {
        self.push(HistoryEntry::new(kind, amount, Local::now()))
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) -> HistoryEntry {
        self.entries.push(entry.clone());
        entry
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded entries of the given kind
    pub fn count(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}
