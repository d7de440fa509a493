//! Defines the transaction store trait.

use crate::{
    Error, SessionId,
    transaction::{Transaction, TransactionId},
};

/// Handles the creation and retrieval of transactions.
///
/// Every read is scoped to a single session: implementers must never return
/// rows belonging to a session other than the one passed in.
pub trait TransactionStore {
    /// Insert a new transaction into the store.
    fn create(&mut self, transaction: Transaction) -> Result<(), Error>;

    /// Retrieve the transaction matching both `id` and `session_id`.
    ///
    /// Returns `Ok(None)` if no such row exists, including when the row
    /// exists under a different session.
    fn get(
        &self,
        id: TransactionId,
        session_id: SessionId,
    ) -> Result<Option<Transaction>, Error>;

    /// Retrieve all transactions belonging to `session_id` in insertion
    /// order.
    fn get_by_session(&self, session_id: SessionId) -> Result<Vec<Transaction>, Error>;

    /// Sum the signed amounts of all transactions belonging to `session_id`.
    ///
    /// Returns `0.0` when the session has no transactions.
    fn sum_by_session(&self, session_id: SessionId) -> Result<f64, Error>;
}
