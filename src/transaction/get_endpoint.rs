//! Defines the endpoint for getting a single transaction by its ID.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error, SessionId,
    state::TransactionState,
    stores::TransactionStore,
    transaction::{Transaction, TransactionId},
};

/// The response body for the single-transaction endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// The matching transaction, or null if no row matches both the ID and
    /// the caller's session.
    pub transaction: Option<Transaction>,
}

/// A route handler for getting one of the session's transactions by ID.
///
/// A malformed (non-UUID) `id` is rejected by the path extractor before this
/// handler runs. A row that exists under another session is reported the same
/// way as a row that does not exist at all: `"transaction": null`.
pub async fn get_transaction_endpoint<T>(
    State(state): State<TransactionState<T>>,
    Path(id): Path<TransactionId>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<TransactionResponse>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let transaction = state.transaction_store.get(id, session_id)?;

    Ok(Json(TransactionResponse { transaction }))
}
