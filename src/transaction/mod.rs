//! Transactions and the endpoints that operate on them.

mod create_endpoint;
mod get_endpoint;
mod list_endpoint;
mod models;
mod summary_endpoint;

pub(crate) use create_endpoint::create_transaction_endpoint;
pub(crate) use get_endpoint::get_transaction_endpoint;
pub(crate) use list_endpoint::get_transactions_endpoint;
pub(crate) use summary_endpoint::get_summary_endpoint;

pub use models::{
    CreateTransactionBody, NewTransaction, Transaction, TransactionId, TransactionType,
};
