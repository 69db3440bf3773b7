use thiserror::Error;

/// Registration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UserError {
    #[error("role not found: {0}")]
    RoleNotFound(String),

    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for UserError {
    fn from(e: sqlx::Error) -> Self {
        UserError::Storage(e.to_string())
    }
}
