use crate::auth::CurrentUser;
use crate::response::ApiResponse;
use crate::routes::common::UserResponse;
use axum::{Json, response::IntoResponse};

/// GET /api/me
///
/// ### Responses
/// - `200 OK` with `{ id, name, role }`
/// - `401 Unauthorized` when `X-User-Id` is missing or unknown
pub async fn get_me(CurrentUser(user): CurrentUser) -> impl IntoResponse {
    Json(ApiResponse::success(
        UserResponse::from(user),
        "User retrieved successfully",
    ))
}
