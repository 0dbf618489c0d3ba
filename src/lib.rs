//! Fintrack is a personal finance tracker: a single-user ledger of income
//! and expense transactions with derived monthly summaries, category and
//! daily breakdowns, and budget-goal tracking.
//!
//! This library provides a JSON REST API. Every route is protected by a
//! bearer-token guard; see [auth]. All state is process-local and lost on
//! restart.

#![warn(missing_docs)]

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
pub mod auth;
mod budget;
mod dashboard;
mod endpoints;
mod period;
mod report;
mod routing;
mod stores;
mod transaction;

pub use app_state::AppState;
pub use period::Period;
pub use routing::build_router;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request was missing required fields or contained malformed values.
    ///
    /// The message is safe to show to the client.
    #[error("{0}")]
    Validation(String),

    /// The request did not carry a valid bearer token.
    ///
    /// The guard logs the specific reason (missing, invalid or expired)
    /// server-side; clients only ever see this one variant.
    #[error("authentication required")]
    Unauthenticated,

    /// The requested resource was not found.
    ///
    /// The client should check that the parameters (e.g., ID) are correct
    /// and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unexpected error occurred.
    ///
    /// The detail string should only be logged for debugging on the server,
    /// never sent to the client.
    #[error("an unexpected error occurred: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Error::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Error::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "authentication required".to_string(),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "the requested resource could not be found".to_string(),
            ),
            Error::Internal(detail) => {
                tracing::error!("An unexpected error occurred: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
