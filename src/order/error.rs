use thiserror::Error;

use crate::core_types::OrderId;

/// Order operation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Invoice amount of order {0} overflows")]
    AmountOverflow(OrderId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for OrderError {
    fn from(e: sqlx::Error) -> Self {
        OrderError::Storage(e.to_string())
    }
}
