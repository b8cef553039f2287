//! Contains the transaction store trait and its implementations.
//!
//! Both stores honour the same contract, so the API behaves identically
//! whichever one the server is configured with.

mod json_file;
mod sqlite;

use std::fmt::Debug;

pub use json_file::JsonFileTransactionStore;
pub use sqlite::SQLiteTransactionStore;

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

/// Handles the creation, retrieval, editing and deletion of transactions.
pub trait TransactionStore: Debug + Send + Sync {
    /// Retrieve every transaction in storage order.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the store cannot be read.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no transaction with `id`,
    /// or [Error::StorageUnavailable] if the store cannot be read.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Store a new transaction, assigning its ID and defaulting its date to today.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransaction] if the fields break a model invariant,
    /// or [Error::StorageUnavailable] if the store cannot be written.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Overwrite the provided fields of the transaction with `id`, keeping its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no transaction with `id`,
    /// [Error::InvalidTransaction] if the merged record breaks a model invariant,
    /// or [Error::StorageUnavailable] if the store cannot be read or written.
    fn replace(&self, id: TransactionId, patch: TransactionPatch) -> Result<Transaction, Error>;

    /// Delete the transaction with `id`.
    ///
    /// Returns whether a transaction was removed. Deleting a missing ID is not
    /// an error.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the store cannot be read or written.
    fn delete(&self, id: TransactionId) -> Result<bool, Error>;
}
