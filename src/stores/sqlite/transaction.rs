//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, types::Type};

use crate::{
    Error, SessionId,
    db::{CreateTable, MapRow},
    stores::TransactionStore,
    transaction::{Transaction, TransactionId},
};

/// Stores transactions in a SQLite database.
///
/// UUIDs are stored in their canonical text form and parsed back when rows
/// are read.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Insert a new transaction into the database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn create(&mut self, transaction: Transaction) -> Result<(), Error> {
        self.connection.lock().unwrap().execute(
            "INSERT INTO \"transaction\" (id, title, amount, session_id)
             VALUES (?1, ?2, ?3, ?4)",
            (
                transaction.id.to_string(),
                &transaction.title,
                transaction.amount,
                transaction.session_id.to_string(),
            ),
        )?;

        Ok(())
    }

    /// Retrieve the transaction matching both `id` and `session_id`.
    ///
    /// A mismatch on either column yields `Ok(None)`: a row under another
    /// session is indistinguishable from a row that does not exist.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn get(
        &self,
        id: TransactionId,
        session_id: SessionId,
    ) -> Result<Option<Transaction>, Error> {
        let result = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, title, amount, session_id FROM \"transaction\"
                 WHERE id = :id AND session_id = :session_id",
            )?
            .query_row(
                &[
                    (":id", &id.to_string()),
                    (":session_id", &session_id.to_string()),
                ],
                Self::map_row,
            );

        match result {
            Ok(transaction) => Ok(Some(transaction)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    /// Retrieve all transactions for `session_id` in the order they were
    /// stored.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn get_by_session(&self, session_id: SessionId) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, title, amount, session_id FROM \"transaction\"
                 WHERE session_id = :session_id",
            )?
            .query_map(&[(":session_id", &session_id.to_string())], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Sum the signed amounts of all transactions for `session_id`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn sum_by_session(&self, session_id: SessionId) -> Result<f64, Error> {
        let sum: Option<f64> = self.connection.lock().unwrap().query_row(
            "SELECT SUM(amount) FROM \"transaction\" WHERE session_id = :session_id",
            &[(":session_id", &session_id.to_string())],
            |row| row.get(0),
        )?;

        // SUM over zero rows yields NULL.
        Ok(sum.unwrap_or(0.0))
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                    id TEXT PRIMARY KEY,
                    title TEXT NOT NULL,
                    amount REAL NOT NULL,
                    session_id TEXT NOT NULL
                    )",
            (),
        )?;

        // All reads filter on session_id.
        connection.execute(
            "CREATE INDEX IF NOT EXISTS transaction_session_id
             ON \"transaction\" (session_id)",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id: String = row.get(offset)?;
        let id = id
            .parse()
            .map_err(|error| to_conversion_failure(offset, error))?;
        let title = row.get(offset + 1)?;
        let amount = row.get(offset + 2)?;
        let session_id: String = row.get(offset + 3)?;
        let session_id = session_id
            .parse()
            .map_err(|error| to_conversion_failure(offset + 3, error))?;

        Ok(Transaction {
            id,
            title,
            amount,
            session_id,
        })
    }
}

fn to_conversion_failure(column: usize, error: uuid::Error) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(error))
}
