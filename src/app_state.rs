//! Implements a struct that holds the state of the REST server.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    stores::{JsonFileTransactionStore, SQLiteTransactionStore, TransactionStore},
};

/// Where the server persists transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// A single pretty-printed JSON file, rewritten on every change.
    File,
    /// A SQLite database file.
    Sqlite,
}

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store holding the transaction collection.
    pub store: Arc<dyn TransactionStore>,
}

impl AppState {
    /// Create a new [AppState] around `store`.
    pub fn new(store: impl TransactionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Open the store selected by `backend` at `path`.
    ///
    /// For [StorageBackend::Sqlite] this will initialize the database by
    /// adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open(backend: StorageBackend, path: &Path) -> Result<Self, Error> {
        match backend {
            StorageBackend::File => {
                tracing::info!("Storing transactions in the JSON file {}", path.display());
                Ok(Self::new(JsonFileTransactionStore::new(path)))
            }
            StorageBackend::Sqlite => {
                tracing::info!("Storing transactions in the SQLite database {}", path.display());
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                let connection = Connection::open(path)?;
                initialize(&connection)?;

                Ok(Self::new(SQLiteTransactionStore::new(Arc::new(Mutex::new(
                    connection,
                )))))
            }
        }
    }
}
