use crate::response::{ApiResponse, Empty};
use crate::routes::common::format_validation_errors;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use seeder::{SeedError, SeedOptions, seed_database};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SeedRequest {
    #[validate(range(min = 1, max = 500, message = "students must be between 1 and 500"))]
    pub students: Option<usize>,
    pub rng_seed: Option<u64>,
}

/// POST /api/seed
///
/// Fills an empty database with the demo data set.
///
/// ### Request Body
/// ```json
/// { "students": 30, "rng_seed": 42 }
/// ```
/// The body is optional, as are both fields. With no body the defaults apply.
///
/// ### Responses
/// - `200 OK` with `{ users, courses, enrollments, assignments, submissions }`
/// - `400 Bad Request` - `students` outside 1..=500
/// - `409 Conflict` - the database already holds data
/// - `500 Internal Server Error`
pub async fn seed(
    State(app_state): State<AppState>,
    body: Option<Json<SeedRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error(format_validation_errors(&e))),
        )
            .into_response();
    }

    let defaults = SeedOptions::default();
    let options = SeedOptions {
        students: req.students.unwrap_or(defaults.students),
        rng_seed: req.rng_seed,
        report: false,
    };

    match seed_database(app_state.db(), options).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(ApiResponse::success(summary, "Database seeded successfully")),
        )
            .into_response(),
        Err(SeedError::AlreadySeeded) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error("Database already seeded")),
        )
            .into_response(),
        Err(SeedError::Database(e)) => {
            tracing::error!(error = %e, "seeding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Seeding failed")),
            )
                .into_response()
        }
    }
}
