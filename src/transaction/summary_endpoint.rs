//! Defines the endpoint for computing the session's balance summary.

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{Error, SessionId, state::TransactionState, stores::TransactionStore};

/// The signed sum of all transaction amounts for a session.
#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    /// The session's balance. Zero when the session has no transactions.
    pub amount: f64,
}

/// The response body for the summary endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The session's balance summary.
    pub summary: Summary,
}

/// A route handler for computing the session's running balance.
pub async fn get_summary_endpoint<T>(
    State(state): State<TransactionState<T>>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<SummaryResponse>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let amount = state.transaction_store.sum_by_session(session_id)?;

    Ok(Json(SummaryResponse {
        summary: Summary { amount },
    }))
}
