//! The API endpoint URIs.

/// The route for listing (GET) and creating (POST) transactions.
pub const TRANSACTIONS: &str = "/";
/// The route for computing the session's balance summary.
pub const SUMMARY: &str = "/summary";
/// The route for getting a single transaction by its ID.
pub const TRANSACTION: &str = "/{id}";
