//! The in-memory store for the transaction ledger.

use serde::Serialize;

use crate::transaction::{Transaction, TransactionDraft, TransactionId};

/// The outcome of removing a transaction from the ledger.
///
/// Removing an ID that is not in the ledger is a normal outcome, not an
/// error: callers that retry a delete get `NotFound` the second time and
/// the ledger is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Removal {
    /// The transaction existed and was removed.
    Deleted,
    /// No transaction with the given ID was in the ledger.
    NotFound,
}

/// Holds the ordered collection of transactions for the single user.
///
/// The store keeps transactions in insertion order and allocates IDs from a
/// monotonic counter, so IDs stay unique under rapid consecutive appends.
/// Callers share the store behind a mutex; each method call is one critical
/// section.
#[derive(Debug)]
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a transaction to the ledger, allocating its ID.
    ///
    /// Returns a copy of the stored transaction.
    pub fn append(&mut self, draft: TransactionDraft) -> Transaction {
        let id = self.next_id;
        self.next_id += 1;

        let transaction = draft.into_transaction(id);
        self.transactions.push(transaction.clone());

        transaction
    }

    /// Remove the transaction with the given ID.
    pub fn remove(&mut self, id: TransactionId) -> Removal {
        let before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        if self.transactions.len() < before {
            Removal::Deleted
        } else {
            Removal::NotFound
        }
    }

    /// A snapshot of the ledger in insertion order.
    ///
    /// The snapshot is a copy taken while the store lock is held, so
    /// aggregations running on it never observe appends that happen after
    /// the call.
    pub fn list(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }
}
