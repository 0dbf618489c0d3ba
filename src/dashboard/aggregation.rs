//! Derives summary views from a ledger snapshot.
//!
//! Every function here is pure: it takes a slice of transactions (and an
//! explicit reporting period where one is needed) and returns a value
//! object. Nothing reads the wall clock and nothing is cached, so the same
//! snapshot always produces the same view.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use serde::Serialize;

use crate::{
    period::Period,
    transaction::{Transaction, TransactionKind},
};

/// Income, expense and net totals for one reporting period.
///
/// Both `income` and `expenses` are non-negative even though stored amounts
/// carry sign: expenses are summed as absolute values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    /// Sum of income amounts.
    pub income: f64,
    /// Sum of the absolute values of expense amounts.
    pub expenses: f64,
    /// `income - expenses`.
    pub net: f64,
}

/// The total spent in one category over a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    /// The expense category.
    pub category: String,
    /// Sum of the absolute expense amounts in the category.
    pub total: f64,
}

/// The total spent on one day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyAggregate {
    /// Day of the month, 1 through 31.
    pub day: u32,
    /// Sum of the absolute expense amounts on that day.
    pub total: f64,
}

/// Keep only the transactions whose date falls in `period`.
pub(crate) fn filter_by_period(transactions: &[Transaction], period: Period) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| period.contains(transaction.date))
        .cloned()
        .collect()
}

/// Sum the income and expense totals of `transactions`.
pub(crate) fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expenses += transaction.amount.abs(),
        }
    }

    Totals {
        income,
        expenses,
        net: income - expenses,
    }
}

/// Group absolute expense amounts by category.
///
/// Categories appear in the order they first occur in `transactions`, which
/// for a ledger snapshot is insertion order. Consumers that want the
/// largest category first sort with [sort_by_total_descending].
pub(crate) fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryAggregate> {
    let mut aggregates: Vec<CategoryAggregate> = Vec::new();
    let mut index_by_category: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }

        let amount = transaction.amount.abs();

        match index_by_category.get(&transaction.category) {
            Some(&index) => aggregates[index].total += amount,
            None => {
                index_by_category.insert(transaction.category.clone(), aggregates.len());
                aggregates.push(CategoryAggregate {
                    category: transaction.category.clone(),
                    total: amount,
                });
            }
        }
    }

    aggregates
}

/// Sort a category breakdown by total, largest first.
pub(crate) fn sort_by_total_descending(aggregates: &mut [CategoryAggregate]) {
    aggregates.sort_by(|a, b| b.total.total_cmp(&a.total));
}

/// The category with the largest total, if any expenses exist.
pub(crate) fn top_category(aggregates: &[CategoryAggregate]) -> Option<&CategoryAggregate> {
    aggregates
        .iter()
        .max_by(|a, b| a.total.total_cmp(&b.total))
}

/// Group absolute expense amounts by day of the month.
///
/// The result is sparse: days with no expense activity are omitted rather
/// than zero-filled. Days are sorted ascending.
pub(crate) fn daily_trend(transactions: &[Transaction]) -> Vec<DailyAggregate> {
    let mut totals_by_day: BTreeMap<u32, f64> = BTreeMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }

        *totals_by_day.entry(transaction.date.day()).or_insert(0.0) +=
            transaction.amount.abs();
    }

    totals_by_day
        .into_iter()
        .map(|(day, total)| DailyAggregate { day, total })
        .collect()
}
