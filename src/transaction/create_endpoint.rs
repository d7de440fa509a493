//! Defines the endpoint for creating a new transaction.
//!
//! This is the only unguarded route: it must be reachable by first-time,
//! session-less clients, and it is where the session cookie is minted.

use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    Error,
    session::{SessionId, get_session_id, set_session_cookie},
    state::TransactionState,
    stores::TransactionStore,
    transaction::CreateTransactionBody,
};

/// A route handler for creating a new transaction.
///
/// If the request carries no usable `sessionId` cookie, a fresh session ID is
/// minted and set on the response; an existing cookie is reused and never
/// re-set. Responds 201 with an empty body on success; the created row is not
/// returned.
pub async fn create_transaction_endpoint<T>(
    State(state): State<TransactionState<T>>,
    jar: CookieJar,
    Json(body): Json<CreateTransactionBody>,
) -> Result<(CookieJar, StatusCode), Error>
where
    T: TransactionStore + Send + Sync,
{
    let new_transaction = body.validate().map_err(Error::Validation)?;

    let (jar, session_id) = match get_session_id(&jar) {
        Some(session_id) => (jar, session_id),
        None => {
            let session_id = SessionId::new();
            (set_session_cookie(jar, session_id), session_id)
        }
    };

    let mut store = state.transaction_store;
    store.create(new_transaction.into_transaction(session_id))?;

    Ok((jar, StatusCode::CREATED))
}
