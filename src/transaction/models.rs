//! The transaction domain model and the request body for creating one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::SessionId;

/// Alias for the UUID type used for transaction IDs.
pub type TransactionId = Uuid;

/// A single credit or debit record owned by exactly one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text label describing the transaction.
    pub title: String,
    /// The signed value of the transaction: positive for credits, negative
    /// for debits.
    pub amount: f64,
    /// The session that owns this transaction.
    pub session_id: SessionId,
}

/// Whether a transaction adds to or subtracts from the session's balance.
///
/// The type is an input-only concept: it is folded into the sign of the
/// stored amount and not persisted itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in. The amount is stored as-is.
    Credit,
    /// Money going out. The amount is stored negated.
    Debit,
}

/// The JSON request body for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionBody {
    /// A text label describing the transaction.
    pub title: String,
    /// The unsigned value of the transaction.
    pub amount: f64,
    /// Whether this is a credit or a debit.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl CreateTransactionBody {
    /// Validate the request body, producing the data for a new transaction or
    /// the list of violated rules.
    ///
    /// The returned amount is already sign-normalized: negated for debits,
    /// unchanged for credits.
    pub fn validate(self) -> Result<NewTransaction, Vec<String>> {
        let mut violations = Vec::new();

        if self.title.trim().is_empty() {
            violations.push("title must not be empty".to_owned());
        }

        if !self.amount.is_finite() {
            violations.push("amount must be a finite number".to_owned());
        }

        if !violations.is_empty() {
            return Err(violations);
        }

        let amount = match self.transaction_type {
            TransactionType::Credit => self.amount,
            TransactionType::Debit => -self.amount,
        };

        Ok(NewTransaction {
            title: self.title,
            amount,
        })
    }
}

/// A validated, sign-normalized transaction that has not been assigned to a
/// session yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A text label describing the transaction.
    pub title: String,
    /// The signed value of the transaction.
    pub amount: f64,
}

impl NewTransaction {
    /// Assign this transaction to `session_id`, minting a fresh random ID for
    /// the transaction itself.
    pub fn into_transaction(self, session_id: SessionId) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            title: self.title,
            amount: self.amount,
            session_id,
        }
    }
}

#[cfg(test)]
mod create_transaction_body_tests {
    use crate::session::SessionId;

    use super::{CreateTransactionBody, TransactionType};

    fn body(title: &str, amount: f64, transaction_type: TransactionType) -> CreateTransactionBody {
        CreateTransactionBody {
            title: title.to_owned(),
            amount,
            transaction_type,
        }
    }

    #[test]
    fn credit_keeps_amount_sign() {
        let new_transaction = body("Salary", 5000.0, TransactionType::Credit)
            .validate()
            .unwrap();

        assert_eq!(new_transaction.amount, 5000.0);
    }

    #[test]
    fn debit_negates_amount() {
        let new_transaction = body("Rent", 1200.0, TransactionType::Debit)
            .validate()
            .unwrap();

        assert_eq!(new_transaction.amount, -1200.0);
    }

    #[test]
    fn blank_title_is_a_violation() {
        let violations = body("   ", 12.3, TransactionType::Credit)
            .validate()
            .unwrap_err();

        assert_eq!(violations, vec!["title must not be empty".to_owned()]);
    }

    #[test]
    fn non_finite_amount_is_a_violation() {
        let violations = body("Rent", f64::NAN, TransactionType::Debit)
            .validate()
            .unwrap_err();

        assert_eq!(violations, vec!["amount must be a finite number".to_owned()]);
    }

    #[test]
    fn violations_accumulate() {
        let violations = body("", f64::INFINITY, TransactionType::Credit)
            .validate()
            .unwrap_err();

        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn type_deserializes_from_lowercase() {
        let body: CreateTransactionBody =
            serde_json::from_str(r#"{"title":"Salary","amount":10.0,"type":"credit"}"#).unwrap();

        assert_eq!(body.transaction_type, TransactionType::Credit);
    }

    #[test]
    fn unknown_type_fails_deserialization() {
        let result = serde_json::from_str::<CreateTransactionBody>(
            r#"{"title":"Salary","amount":10.0,"type":"transfer"}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn transaction_id_is_independent_of_session_id() {
        let session_id = SessionId::new();
        let new_transaction = body("Salary", 5000.0, TransactionType::Credit)
            .validate()
            .unwrap();

        let transaction = new_transaction.into_transaction(session_id);

        assert_ne!(transaction.id.to_string(), session_id.to_string());
        assert_eq!(transaction.session_id, session_id);
    }
}
