//! User registration request types

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// User Registration Request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    #[schema(example = "testuser")]
    pub username: String,

    #[validate(length(min = 1, message = "password cannot be empty"))]
    #[schema(example = "password123")]
    pub password: String,

    #[serde(default)]
    #[schema(example = json!(["USER"]))]
    pub roles: Vec<String>,
}
