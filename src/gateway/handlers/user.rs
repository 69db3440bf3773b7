use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::core_types::UserId;

use super::super::state::AppState;
use super::super::types::{ApiResult, RegisterUserRequest, ValidatedJson};

/// Registration confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterUserResponse {
    pub user_id: UserId,
    #[schema(example = "Done")]
    pub status: String,
}

/// Register a new user
///
/// POST /users
#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterUserResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "A requested role does not exist"),
        (status = 409, description = "Username already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterUserRequest>,
) -> ApiResult<RegisterUserResponse> {
    let user_id = state
        .users
        .register_user(req.username, &req.password, &req.roles)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterUserResponse {
            user_id,
            status: "Done".to_string(),
        }),
    ))
}
