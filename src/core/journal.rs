//! Append-only transaction journal
//!
//! This module provides the Journal component that maintains the complete
//! chronological history of attempted ledger operations. Records are only
//! ever appended; nothing is edited or removed, so the journal doubles as
//! the account's audit trail.

use crate::types::TransactionRecord;

/// Append-only store of transaction records
///
/// Maintains records in insertion order, which is chronological by
/// construction since every mutating ledger call appends exactly one record
/// as its final step.
#[derive(Debug, Default)]
pub struct Journal {
    records: Vec<TransactionRecord>,
}

impl Journal {
    /// Create a new empty journal
    pub fn new() -> Self {
        Journal {
            records: Vec::new(),
        }
    }

    /// Append a record to the end of the journal
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Number of records appended so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the journal holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recently appended record, if any
    pub fn last(&self) -> Option<&TransactionRecord> {
        self.records.last()
    }

    /// Cloned snapshot of all records in chronological order
    ///
    /// The caller receives an independent copy; mutating it cannot affect
    /// the journal.
    pub fn records(&self) -> Vec<TransactionRecord> {
        self.records.clone()
    }
}
