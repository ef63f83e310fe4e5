//! Business layer errors
//!
//! Wraps the core taxonomy and persistence errors so the API layer can map
//! variants onto status codes.

use minibank_core::CoreError;
use minibank_persistence::PersistenceError;
use thiserror::Error;

/// Business operation errors
#[derive(Debug, Error)]
pub enum BusinessError {
    #[error("Account number already in use: {0}")]
    NumberTaken(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through_display() {
        let err = BusinessError::from(CoreError::AccountNotFound(7));
        assert_eq!(err.to_string(), "Account not found: 7");
    }

    #[test]
    fn test_number_taken_display() {
        let err = BusinessError::NumberTaken("001".to_string());
        assert_eq!(err.to_string(), "Account number already in use: 001");
    }
}
