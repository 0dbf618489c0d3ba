//! Defines the core data model for ledger transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Error;

/// The ID of a transaction within the ledger.
pub type TransactionId = i64;

/// Whether a transaction brought money in or spent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, stored with a positive amount.
    Income,
    /// Money spent, stored with a negative amount.
    Expense,
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// Transactions are immutable once stored, except for deletion; corrections
/// are modeled as a delete followed by a new append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, unique within the ledger.
    pub id: TransactionId,
    /// The calendar date the transaction happened on. No time of day is
    /// recorded.
    pub date: NaiveDate,
    /// The amount of money spent or earned.
    ///
    /// The sign always agrees with `kind`: positive for income, negative
    /// for expenses. See [TransactionDraft::new].
    pub amount: f64,
    /// Whether this transaction is income or an expense.
    ///
    /// Serialized as `type`, which is what API clients send; `type` is a
    /// reserved word in Rust.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The label the transaction is grouped under in breakdowns.
    pub category: String,
    /// Free-form notes, empty if the caller supplied none.
    pub notes: String,
    /// Marks a transaction the user expects to repeat every month.
    ///
    /// Informational only: a recurring transaction never generates future
    /// ledger entries by itself.
    pub recurring: bool,
}

/// Validated data for a transaction that has not been appended to the
/// ledger yet.
///
/// The draft is where the sign invariant is enforced: whatever sign the
/// caller supplied, the amount is normalized so income is stored positive
/// and expenses negative. A transaction with a sign that disagrees with its
/// kind can therefore never be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    amount: f64,
    date: NaiveDate,
    kind: TransactionKind,
    category: String,
    notes: String,
    recurring: bool,
}

impl TransactionDraft {
    /// Validate and normalize the data for a new transaction.
    ///
    /// # Errors
    /// Returns [Error::Validation] if `amount` is not a finite number or
    /// `category` is empty.
    pub fn new(
        amount: f64,
        kind: TransactionKind,
        category: String,
        date: NaiveDate,
        notes: String,
        recurring: bool,
    ) -> Result<Self, Error> {
        if !amount.is_finite() {
            return Err(Error::Validation(
                "amount must be a finite number".to_string(),
            ));
        }

        if category.trim().is_empty() {
            return Err(Error::Validation("category must not be empty".to_string()));
        }

        let amount = match kind {
            TransactionKind::Income => amount.abs(),
            TransactionKind::Expense => -amount.abs(),
        };

        Ok(Self {
            amount,
            date,
            kind,
            category,
            notes,
            recurring,
        })
    }

    /// Finalize the draft as a stored transaction with the given ID.
    pub(crate) fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            notes: self.notes,
            recurring: self.recurring,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        transaction::{TransactionDraft, TransactionKind},
        Error,
    };

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    #[test]
    fn income_amount_is_normalized_positive() {
        for amount in [3500.0, -3500.0] {
            let draft = TransactionDraft::new(
                amount,
                TransactionKind::Income,
                "Salary".to_string(),
                test_date(),
                String::new(),
                false,
            )
            .unwrap();

            let transaction = draft.into_transaction(1);
            assert_eq!(transaction.amount, 3500.0);
        }
    }

    #[test]
    fn expense_amount_is_normalized_negative() {
        for amount in [800.0, -800.0] {
            let draft = TransactionDraft::new(
                amount,
                TransactionKind::Expense,
                "Rent".to_string(),
                test_date(),
                String::new(),
                false,
            )
            .unwrap();

            let transaction = draft.into_transaction(1);
            assert_eq!(transaction.amount, -800.0);
        }
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = TransactionDraft::new(
                amount,
                TransactionKind::Expense,
                "Rent".to_string(),
                test_date(),
                String::new(),
                false,
            );

            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }

    #[test]
    fn blank_category_is_rejected() {
        let result = TransactionDraft::new(
            12.5,
            TransactionKind::Expense,
            "   ".to_string(),
            test_date(),
            String::new(),
            false,
        );

        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
