//! The route handler for appending a transaction to the ledger.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::{
    auth::Claims,
    transaction::{Transaction, TransactionDraft, TransactionKind},
    AppState, Error,
};

/// The payload for creating a transaction.
///
/// `amount`, `category` and `type` are required. The date defaults to
/// today, notes to empty and recurring to false.
#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    amount: f64,
    category: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    recurring: Option<bool>,
}

/// A route handler for creating a new transaction.
///
/// The [Claims] extractor runs before the body is read, so an
/// unauthenticated request is rejected before the ledger is touched.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<CreateTransaction>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let date = payload.date.unwrap_or_else(|| Local::now().date_naive());
    let draft = TransactionDraft::new(
        payload.amount,
        payload.kind,
        payload.category,
        date,
        payload.notes.unwrap_or_default(),
        payload.recurring.unwrap_or(false),
    )?;

    let transaction = state.ledger().lock().unwrap().append(draft);

    tracing::info!(
        "{} created transaction {} ({}, {})",
        claims.sub,
        transaction.id,
        transaction.category,
        transaction.amount
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}
