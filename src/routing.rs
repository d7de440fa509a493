//! Application router configuration with guarded and unguarded route
//! definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    session::session_guard,
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, get_summary_endpoint, get_transaction_endpoint,
        get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// The read routes sit behind the session guard; the create route is exempt
/// so that first-time, session-less clients can reach it.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    let guarded_routes = Router::new()
        .route(endpoints::TRANSACTIONS, get(get_transactions_endpoint::<T>))
        .route(endpoints::SUMMARY, get(get_summary_endpoint::<T>))
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint::<T>))
        .layer(middleware::from_fn(session_guard));

    let unguarded_routes = Router::new().route(
        endpoints::TRANSACTIONS,
        post(create_transaction_endpoint::<T>),
    );

    guarded_routes
        .merge(unguarded_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The response for requests to paths that do not match any route.
async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))).into_response()
}

#[cfg(test)]
mod router_tests {
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        build_router, endpoints, session::SESSION_COOKIE, stores::sqlite::create_app_state,
        transaction::Transaction,
    };

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = create_app_state(connection).unwrap();

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn guarded_routes_reject_requests_without_cookie() {
        let server = get_test_server();
        let guarded_paths = [
            endpoints::TRANSACTIONS.to_owned(),
            endpoints::SUMMARY.to_owned(),
            format!("/{}", uuid::Uuid::new_v4()),
        ];

        for path in guarded_paths {
            let response = server.get(&path).await;

            response.assert_status_unauthorized();
            response.assert_json(&json!({ "error": "Unauthorized" }));
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let server = get_test_server();

        let response = server.get("/summary/extra").await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "error": "Not Found" }));
    }

    // The end-to-end flow: a session-less client earns a salary, pays rent,
    // and checks their balance.
    #[tokio::test]
    async fn salary_and_rent_scenario() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "title": "Salary", "amount": 5000.0, "type": "credit" }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let session_cookie = response.cookie(SESSION_COOKIE);
        let session_cookie = Cookie::new(SESSION_COOKIE, session_cookie.value().to_owned());

        let response = server
            .get(endpoints::SUMMARY)
            .add_cookie(session_cookie.clone())
            .await;
        response.assert_json(&json!({ "summary": { "amount": 5000.0 } }));

        let response = server
            .post(endpoints::TRANSACTIONS)
            .add_cookie(session_cookie.clone())
            .json(&json!({ "title": "Rent", "amount": 1200.0, "type": "debit" }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let response = server
            .get(endpoints::SUMMARY)
            .add_cookie(session_cookie.clone())
            .await;
        response.assert_json(&json!({ "summary": { "amount": 3800.0 } }));

        let response = server
            .get(endpoints::TRANSACTIONS)
            .add_cookie(session_cookie.clone())
            .await;
        response.assert_status_ok();
        let transactions: Vec<Transaction> =
            serde_json::from_value(response.json::<serde_json::Value>()["transactions"].clone())
                .unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].amount, -1200.0);

        let response = server
            .get(&format!("/{}", transactions[0].id))
            .add_cookie(session_cookie)
            .await;
        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["transaction"]["title"], "Salary");
    }
}
