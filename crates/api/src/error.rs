//! API error responses
//!
//! Maps business errors onto HTTP status codes. Every error body has the
//! shape `{"detail": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use minibank_business::BusinessError;
use minibank_core::CoreError;
use serde_json::json;

/// An HTTP status plus the human-readable detail message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Invalid or expired token")
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl From<BusinessError> for ApiError {
    fn from(err: BusinessError) -> Self {
        match &err {
            BusinessError::Core(core) => {
                let status = match core {
                    CoreError::AccountNotFound(_) | CoreError::TransactionNotFound(_) => {
                        StatusCode::NOT_FOUND
                    }
                    CoreError::InsufficientBalance { .. } | CoreError::InvalidAmount(_) => {
                        StatusCode::BAD_REQUEST
                    }
                };
                Self::new(status, err.to_string())
            }
            BusinessError::NumberTaken(_) => Self::new(StatusCode::CONFLICT, err.to_string()),
            BusinessError::Persistence(p) if p.is_not_found() => {
                Self::new(StatusCode::NOT_FOUND, err.to_string())
            }
            BusinessError::Persistence(_) => {
                tracing::error!(error = %err, "request failed");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_mapping() {
        let err: ApiError = BusinessError::from(CoreError::AccountNotFound(1)).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err: ApiError = BusinessError::from(CoreError::InsufficientBalance {
            requested: dec!(1000),
            available: dec!(70),
        })
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err: ApiError = BusinessError::from(CoreError::InvalidAmount(dec!(0))).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err: ApiError = BusinessError::NumberTaken("001".to_string()).into();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_unauthorized_detail() {
        let err = ApiError::unauthorized();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.detail, "Invalid or expired token");
    }
}
