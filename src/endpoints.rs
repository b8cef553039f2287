//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}', use
//! [format_endpoint].

use crate::database_id::TransactionId;

/// The root route, a plain text health check.
pub const ROOT: &str = "/";
/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to get, replace and delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Fill in the `{..}` parameter of `endpoint_path` with `id`,
/// e.g. [TRANSACTION] with 7 becomes "/api/transactions/7".
///
/// Only the first parameter is replaced. A path without a parameter is
/// returned as is.
pub fn format_endpoint(endpoint_path: &str, id: TransactionId) -> String {
    let Some((before, rest)) = endpoint_path.split_once('{') else {
        return endpoint_path.to_owned();
    };
    let after = rest.split_once('}').map_or("", |(_, after)| after);

    format!("{before}{id}{after}")
}
