//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response envelope (health, errors)
//! - `ApiError`: Error type every handler returns
//! - `error_codes`: Standard error code constants

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::order::OrderError;
use crate::user::UserError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// ApiError
// ============================================================================

/// Handler error, rendered as `(status, ApiResponse::error(code, msg))`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.code, self.msg))).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => {
                ApiError::new(StatusCode::NOT_FOUND, error_codes::ORDER_NOT_FOUND, e.to_string())
            }
            OrderError::AmountOverflow(_) => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                error_codes::AMOUNT_OVERFLOW,
                e.to_string(),
            ),
            // Storage details stay in the logs
            OrderError::Storage(_) => ApiError::internal("Order storage unavailable"),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::RoleNotFound(_) => {
                ApiError::new(StatusCode::NOT_FOUND, error_codes::ROLE_NOT_FOUND, e.to_string())
            }
            UserError::DuplicateUsername(_) => ApiError::new(
                StatusCode::CONFLICT,
                error_codes::USERNAME_TAKEN,
                e.to_string(),
            ),
            UserError::Hashing(_) | UserError::Storage(_) => {
                ApiError::internal("Registration failed")
            }
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const AMOUNT_OVERFLOW: i32 = 1004;

    // Resource errors (4xxx)
    pub const ORDER_NOT_FOUND: i32 = 4001;
    pub const ROLE_NOT_FOUND: i32 = 4002;
    pub const USERNAME_TAKEN: i32 = 4091;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}
