use crate::response::ApiResponse;
use crate::routes::common::UserResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::{Column as UserColumn, Entity as UserEntity};
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

/// GET /api/users
///
/// Lists every user ordered by id. Intended for picking an `X-User-Id`.
///
/// ### Responses
/// - `200 OK` with `[{ id, name, role }]`
/// - `500 Internal Server Error`
pub async fn list_users(State(app_state): State<AppState>) -> impl IntoResponse {
    match UserEntity::find()
        .order_by_asc(UserColumn::Id)
        .all(app_state.db())
        .await
    {
        Ok(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(users, "Users retrieved successfully")),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to list users");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<UserResponse>>::error("Failed to retrieve users")),
            )
        }
    }
}
