//! Defines the endpoint for listing the current session's transactions.

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error, SessionId, state::TransactionState, stores::TransactionStore, transaction::Transaction,
};

/// The response body for the transaction list endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// The session's transactions in the order they were stored.
    pub transactions: Vec<Transaction>,
}

/// A route handler for listing all of the session's transactions.
///
/// The result is unpaginated; an unbounded result size is a known limitation.
pub async fn get_transactions_endpoint<T>(
    State(state): State<TransactionState<T>>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<TransactionsResponse>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let transactions = state.transaction_store.get_by_session(session_id)?;

    Ok(Json(TransactionsResponse { transactions }))
}
