use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::AnalyticsError;
use validator::ValidationErrors;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub role: String,
}

impl From<db::models::user::Model> for UserResponse {
    fn from(user: db::models::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
        }
    }
}

/// Joins the messages of all failed validations with `; `.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Maps a core failure to its HTTP status:
/// `InvalidIdentity` 401, `AccessDenied` 403, `NotFound` 404, `Database` 500.
pub fn analytics_error_response(err: AnalyticsError) -> Response {
    let (status, message) = match &err {
        AnalyticsError::InvalidIdentity => (StatusCode::UNAUTHORIZED, "Unknown user".to_string()),
        AnalyticsError::AccessDenied => (StatusCode::FORBIDDEN, "Access denied".to_string()),
        AnalyticsError::NotFound { entity, .. } => {
            (StatusCode::NOT_FOUND, format!("{} not found", entity))
        }
        AnalyticsError::Database(e) => {
            tracing::error!(error = %e, "database error while computing analytics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    (status, Json(ApiResponse::<Empty>::error(message))).into_response()
}
