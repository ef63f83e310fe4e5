//! # Error Module
//!
//! Domain error taxonomy, defined with thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(i64),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(Decimal),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Whether this is one of the not-found errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::AccountNotFound(_) | CoreError::TransactionNotFound(_)
        )
    }

    /// Whether this is an insufficient balance error
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, CoreError::InsufficientBalance { .. })
    }
}
