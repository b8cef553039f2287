//! Implements a transaction store backed by a single JSON file.
//!
//! The whole collection is read into memory, changed, and written back as a
//! pretty-printed JSON array on every write. The file is not locked, so two
//! processes writing to the same file will race and the last write wins.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use time::OffsetDateTime;

use crate::{
    Error,
    database_id::TransactionId,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionPatch, today},
};

/// Stores transactions in a JSON file.
///
/// A missing file is treated as an empty collection and is created on the
/// first write.
#[derive(Debug)]
pub struct JsonFileTransactionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileTransactionStore {
    /// Create a store for the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Transaction>, Error> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                tracing::error!("Could not read {}: {error}", self.path.display());
                return Err(error.into());
            }
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&text).map_err(|error| {
            tracing::error!("Could not parse {}: {error}", self.path.display());
            error.into()
        })
    }

    fn write_all(&self, transactions: &[Transaction]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let text = serde_json::to_string_pretty(transactions)?;
        fs::write(&self.path, text).map_err(|error| {
            tracing::error!("Could not write {}: {error}", self.path.display());
            error.into()
        })
    }

    /// Run `change` on the stored collection under the write lock and
    /// persist the result.
    fn modify<T>(
        &self,
        change: impl FnOnce(&mut Vec<Transaction>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::StorageUnavailable("the file store lock is poisoned".to_owned()))?;

        let mut transactions = self.read_all()?;
        let result = change(&mut transactions)?;
        self.write_all(&transactions)?;

        Ok(result)
    }
}

/// Derive an ID from the current time in milliseconds, bumped past the
/// largest existing ID so that two transactions created in the same
/// millisecond still get distinct IDs.
///
/// # Errors
/// Returns [Error::StorageUnavailable] if the largest stored ID is already
/// [TransactionId::MAX].
fn next_id(transactions: &[Transaction]) -> Result<TransactionId, Error> {
    let now_millis = TransactionId::try_from(
        OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000,
    )
    .map_err(|_| Error::StorageUnavailable("the system clock is out of range".to_owned()))?;
    let max_id = transactions.iter().map(|transaction| transaction.id).max();

    match max_id {
        Some(max_id) if max_id >= now_millis => max_id.checked_add(1).ok_or_else(|| {
            tracing::error!("Cannot assign a transaction ID after {max_id}");
            Error::StorageUnavailable("no transaction IDs are left".to_owned())
        }),
        _ => Ok(now_millis),
    }
}

impl TransactionStore for JsonFileTransactionStore {
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.read_all()
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.read_all()?
            .into_iter()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)
    }

    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        transaction.validate()?;

        self.modify(|transactions| {
            let transaction = transaction.finalize(next_id(transactions)?, today());
            transactions.push(transaction.clone());
            Ok(transaction)
        })
    }

    fn replace(&self, id: TransactionId, patch: TransactionPatch) -> Result<Transaction, Error> {
        self.modify(|transactions| {
            let existing = transactions
                .iter_mut()
                .find(|transaction| transaction.id == id)
                .ok_or(Error::NotFound)?;

            let updated = patch.apply(existing);
            updated.validate()?;
            *existing = updated.clone();

            Ok(updated)
        })
    }

    fn delete(&self, id: TransactionId) -> Result<bool, Error> {
        self.modify(|transactions| {
            let count_before = transactions.len();
            transactions.retain(|transaction| transaction.id != id);

            Ok(transactions.len() != count_before)
        })
    }
}
