//! Finance Tracker is a small app for recording personal income and expenses.
//!
//! This library provides:
//! - a JSON REST API for creating, listing, editing, and deleting transactions,
//!   backed by either a flat JSON file or a SQLite document collection,
//! - the client-side pieces a user interface drives: the transaction form
//!   state machine, the list/summary derivations, an application controller,
//!   and an HTTP client for the REST API.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
pub mod client;
mod currency;
mod database_id;
mod db;
pub mod endpoints;
mod logging;
mod message;
mod not_found;
mod routing;
pub mod stores;
mod summary;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, StorageBackend};
pub use category::{EXPENSE_CATEGORIES, INCOME_CATEGORIES, is_preset, presets_for};
pub use currency::{amount_label, format_currency};
pub use database_id::TransactionId;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use message::Message;
pub use routing::build_router;
pub use summary::{
    CategoryFilter, Summary, TransactionFilter, TypeFilter, UNCATEGORIZED_LABEL, category_options,
    summarize,
};
pub use transaction::{
    CUSTOM_CATEGORY_OPTION, CategoryChoice, NewTransaction, Transaction, TransactionDraft,
    TransactionForm, TransactionPatch, TransactionType, ValidationError, ValidationErrors,
};

use crate::{message::message_response, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for the ctrl+c signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not install the terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
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

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transaction form failed validation.
    ///
    /// This error is handled entirely on the client and the submission is
    /// aborted before anything is sent to the server.
    #[error("the transaction form is invalid: {0}")]
    Validation(ValidationErrors),

    /// A transaction sent to the server breaks one of the model invariants,
    /// e.g. a non-positive amount or an empty description.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has not already been deleted.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The backing store could not be read or written, or its contents are
    /// corrupt.
    ///
    /// The error string should only be logged for debugging on the server.
    /// Clients are sent a generic internal server error instead.
    #[error("the transaction store is unavailable: {0}")]
    StorageUnavailable(String),

    /// The client could not reach the server or could not decode its reply.
    #[error("could not communicate with the server: {0}")]
    NetworkFailure(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::StorageUnavailable(error.to_string())
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::StorageUnavailable(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::StorageUnavailable(format!("could not parse stored transactions: {value}"))
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {rejection}");
        Error::InvalidTransaction("the request body is not a valid transaction".to_owned())
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::NetworkFailure(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response("Transaction not found"),
            Error::InvalidTransaction(reason) => message_response(StatusCode::BAD_REQUEST, &reason),
            Error::Validation(errors) => {
                message_response(StatusCode::BAD_REQUEST, &errors.to_string())
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                message_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred",
                )
            }
        }
    }
}
