//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the payloads for creating and editing one
//! - The form state machine that reconciles preset and custom categories
//! - The JSON route handlers for the transactions API

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod get_endpoint;
mod list_endpoint;

pub use core::{NewTransaction, Transaction, TransactionPatch, TransactionType, today};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::{
    CUSTOM_CATEGORY_OPTION, CategoryChoice, TransactionDraft, TransactionForm, ValidationError,
    ValidationErrors,
};
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;

use crate::{Error, database_id::TransactionId};

/// Parse the ID segment of a transaction URL.
///
/// IDs that are not integers cannot refer to a stored transaction, so they
/// are reported as [Error::NotFound] rather than as a malformed request.
pub(crate) fn parse_transaction_id(raw_id: &str) -> Result<TransactionId, Error> {
    raw_id.trim().parse().map_err(|_| Error::NotFound)
}
