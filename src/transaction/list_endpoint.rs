//! The route handler for listing transactions.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    auth::Claims, dashboard::aggregation, period::Period, transaction::Transaction, AppState,
    Error,
};

/// Optional period filter for the transaction list.
///
/// Unlike the summary views, listing does not require a period; filtering
/// needs both parts or neither.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    year: Option<i32>,
    month: Option<u32>,
}

/// A route handler for listing transactions in insertion order, optionally
/// filtered to a reporting period.
pub async fn list_transactions_endpoint(
    State(state): State<AppState>,
    _claims: Claims,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let snapshot = state.ledger().lock().unwrap().list();

    let transactions = match (params.year, params.month) {
        (Some(year), Some(month)) => {
            aggregation::filter_by_period(&snapshot, Period::new(year, month)?)
        }
        (None, None) => snapshot,
        _ => {
            return Err(Error::Validation(
                "filtering by period requires both year and month".to_string(),
            ))
        }
    };

    Ok(Json(transactions))
}
