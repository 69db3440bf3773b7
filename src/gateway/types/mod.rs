//! Gateway types module
//!
//! ## Input Types
//! - [`StrictDecimal`]: Format-validated, non-negative decimal for API input
//! - [`CreateOrderRequest`], [`RegisterUserRequest`]: request bodies
//! - [`ValidatedJson`]: Axum extractor running `validator` checks
//! - [`ApiPath`]: Path extractor rejecting with [`ApiError`]
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`ApiError`]: Handler error with HTTP status and error code

pub mod extract;
pub mod money;
pub mod order;
pub mod response;
pub mod user;

// Re-export commonly used types at module root
pub use extract::{ApiPath, ValidatedJson};
pub use money::StrictDecimal;
pub use order::CreateOrderRequest;
pub use response::{ApiError, ApiResponse, ApiResult, error_codes};
pub use user::RegisterUserRequest;
