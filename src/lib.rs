//! Pocket Ledger is a small REST API for tracking credits and debits against
//! an anonymous browser session.
//!
//! There are no user accounts: the first write mints a `sessionId` cookie and
//! every read only ever sees the transactions created under that cookie's
//! session.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod db;
mod endpoints;
mod routing;
mod session;
mod state;
pub mod stores;
pub mod transaction;

pub use db::initialize as initialize_db;
pub use routing::build_router;
pub use session::SessionId;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A guarded route was requested without a usable session cookie.
    #[error("no session cookie in the request")]
    Unauthorized,

    /// The request body passed deserialization but failed the application's
    /// validation rules. Holds one message per violated rule.
    #[error("request body failed validation: {0:?}")]
    Validation(Vec<String>),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            Error::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation failed", "violations": violations })),
            )
                .into_response(),
            // Store failures are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn unauthorized_renders_exact_body() {
        let response = Error::Unauthorized.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response_json(response).await,
            serde_json::json!({ "error": "Unauthorized" })
        );
    }

    #[tokio::test]
    async fn validation_renders_violations() {
        let response =
            Error::Validation(vec!["title must not be empty".to_owned()]).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["violations"][0], "title must not be empty");
    }

    #[tokio::test]
    async fn sql_error_renders_opaque_500() {
        let response = Error::SqlError(rusqlite::Error::QueryReturnedNoRows).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response_json(response).await,
            serde_json::json!({ "error": "Internal Server Error" })
        );
    }
}
