//! The route handler for deleting a transaction.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{auth::Claims, stores::Removal, transaction::TransactionId, AppState};

/// Reports what the delete actually did.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    outcome: Removal,
}

/// A route handler for deleting a transaction by ID.
///
/// Deleting is idempotent from the caller's perspective: the response is
/// 200 whether or not the transaction existed, with the `outcome` field
/// distinguishing `deleted` from `not_found`.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    claims: Claims,
    Path(transaction_id): Path<TransactionId>,
) -> Json<DeleteResponse> {
    let outcome = state.ledger().lock().unwrap().remove(transaction_id);

    match outcome {
        Removal::Deleted => {
            tracing::info!("{} deleted transaction {transaction_id}", claims.sub);
        }
        Removal::NotFound => {
            tracing::debug!("delete of unknown transaction {transaction_id} was a no-op");
        }
    }

    Json(DeleteResponse { outcome })
}
