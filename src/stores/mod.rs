//! Defines the store traits and their SQLite implementations.

pub mod sqlite;
mod transaction;

pub use sqlite::SQLiteTransactionStore;
pub use transaction::TransactionStore;
