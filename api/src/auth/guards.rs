use crate::auth::extractors::{CurrentUser, header_user_id};
use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use services::{AnalyticsError, AnalyticsService};
use util::state::AppState;

/// Ensures the request names a known user.
///
/// Resolves `X-User-Id` to a stored user and inserts it as [`CurrentUser`]
/// for downstream extractors.
///
/// - `401 Unauthorized` when the header is missing, malformed or names no user
/// - `500 Internal Server Error` when the lookup itself fails
pub async fn allow_authenticated(
    State(app_state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (parts, body) = req.into_parts();
    let Some(user_id) = header_user_id(&parts) else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Missing or invalid X-User-Id header")),
        ));
    };

    let service = AnalyticsService::new(app_state.db_clone());
    let user = match service.resolve_user(user_id).await {
        Ok(user) => user,
        Err(AnalyticsError::InvalidIdentity) => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Unknown user")),
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, user_id, "failed to resolve requester");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            ));
        }
    };

    req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}
