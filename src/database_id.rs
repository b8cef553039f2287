//! Database ID type definition.

/// Alias for the integer type used for transaction IDs.
///
/// The JSON file store derives IDs from the creation time in milliseconds,
/// the SQLite store uses the table's autoincrementing primary key.
pub type TransactionId = i64;
