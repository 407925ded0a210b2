use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use db::models::user;
use services::Requester;

/// Header carrying the requester's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The claimed user id, `None` when the header is absent or not an integer.
pub fn header_user_id(parts: &Parts) -> Option<i64> {
    parts
        .headers
        .get(USER_ID_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// The stored user behind the request, placed in the request extensions by
/// [`crate::auth::guards::allow_authenticated`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub user::Model);

impl CurrentUser {
    pub fn requester(&self) -> Requester {
        Requester::from(&self.0)
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse<Empty>>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Authentication required")),
        ))
    }
}
