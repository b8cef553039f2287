#![allow(missing_docs)]

pub(crate) mod http;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tempfile::TempDir;

use crate::{
    AppState, initialize_db,
    stores::{JsonFileTransactionStore, SQLiteTransactionStore},
};

pub(crate) use http::{assert_content_type, assert_status, json_body, parse_json};

/// App state backed by an in-memory SQLite database.
pub(crate) fn sqlite_state() -> AppState {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    initialize_db(&connection).expect("could not initialize test DB");

    AppState::new(SQLiteTransactionStore::new(Arc::new(Mutex::new(connection))))
}

/// App state backed by a JSON file in a temporary directory.
///
/// Keep the returned directory alive for as long as the state is used.
pub(crate) fn json_file_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().expect("could not create temp dir");
    let state = AppState::new(JsonFileTransactionStore::new(
        dir.path().join("transactions.json"),
    ));

    (dir, state)
}
