//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{
    Connection, Row, ToSql, params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};

use crate::{
    Error,
    database_id::TransactionId,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionPatch, TransactionType, today},
};

const SELECT_COLUMNS: &str = "SELECT id, type, amount, category, description, date FROM \"transaction\"";

/// Stores transactions as rows of a SQLite table.
///
/// Each operation is a single lookup, insert, update or delete, and IDs come
/// from the table's autoincrementing primary key. The table must exist, see
/// [initialize_db](crate::initialize_db).
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::StorageUnavailable("could not acquire the database lock".to_owned())
        })
    }

    fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(0)?,
            transaction_type: row.get(1)?,
            amount: row.get(2)?,
            category: row.get(3)?,
            description: row.get(4)?,
            date: row.get(5)?,
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Query for all transactions in the database, oldest first.
    ///
    /// # Errors
    /// This function will return a [Error::StorageUnavailable] if there is a SQL error.
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.lock()?
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?
            .query_map([], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::StorageUnavailable] if there is some other SQL error.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let transaction = self
            .lock()?
            .prepare(&format!("{SELECT_COLUMNS} WHERE id = :id"))?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(transaction)
    }

    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        transaction.validate()?;
        let date = transaction.date.unwrap_or_else(today);

        let transaction = self
            .lock()?
            .prepare(
                "INSERT INTO \"transaction\" (type, amount, category, description, date)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, type, amount, category, description, date",
            )?
            .query_row(
                params![
                    transaction.transaction_type,
                    transaction.amount,
                    transaction.category,
                    transaction.description,
                    date,
                ],
                Self::map_row,
            )?;

        Ok(transaction)
    }

    fn replace(&self, id: TransactionId, patch: TransactionPatch) -> Result<Transaction, Error> {
        let connection = self.lock()?;
        let tx = connection.unchecked_transaction()?;

        let existing = tx
            .prepare(&format!("{SELECT_COLUMNS} WHERE id = :id"))?
            .query_row(&[(":id", &id)], Self::map_row)?;

        let updated = patch.apply(&existing);
        updated.validate()?;

        tx.execute(
            "UPDATE \"transaction\"
            SET \
                type = ?1, \
                amount = ?2, \
                category = ?3, \
                description = ?4, \
                date = ?5, \
                updated_at = CURRENT_TIMESTAMP \
            WHERE id = ?6;",
            params![
                updated.transaction_type,
                updated.amount,
                updated.category,
                updated.description,
                updated.date,
                id,
            ],
        )?;
        tx.commit()?;

        Ok(updated)
    }

    fn delete(&self, id: TransactionId) -> Result<bool, Error> {
        let rows_affected = self
            .lock()?
            .execute(
                "DELETE FROM \"transaction\" WHERE id = :id",
                &[(":id", &id)],
            )?;

        Ok(rows_affected > 0)
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}
