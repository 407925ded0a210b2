use crate::auth::CurrentUser;
use crate::response::ApiResponse;
use crate::routes::common::analytics_error_response;
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use services::AnalyticsService;
use util::state::AppState;

/// GET /api/analytics/course/{course_id}/summary
///
/// Visible to admins, the course's instructor and its enrolled students.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "course": { "id": 1, "code": "INF101", "name": "Intro au génie logiciel" },
///     "students": 21,
///     "assignments": 5,
///     "total_submission_records": 105,
///     "submitted": 82,
///     "late": 11,
///     "missing": 12,
///     "submission_rate": 0.8857,
///     "late_rate": 0.1048,
///     "missing_rate": 0.1143,
///     "course_average": 74.91
///   },
///   "message": "Course summary computed"
/// }
/// ```
/// - `401 Unauthorized` - missing or unknown `X-User-Id`
/// - `403 Forbidden` - requester may not view this course
/// - `404 Not Found` - no such course
pub async fn course_summary(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Path(course_id): Path<i64>,
) -> Response {
    let service = AnalyticsService::new(app_state.db_clone());
    match service.course_summary_for(&user.requester(), course_id).await {
        Ok(summary) => Json(ApiResponse::success(summary, "Course summary computed")).into_response(),
        Err(e) => analytics_error_response(e),
    }
}

/// GET /api/analytics/assignment/{assignment_id}/stats
///
/// Visible to whoever may view the assignment's course.
///
/// ### Responses
/// - `200 OK` with `{ assignment_id, total_records, submitted, late, missing, average, min, max }`;
///   `average`, `min` and `max` are `null` when nothing is graded
/// - `401 Unauthorized`, `403 Forbidden`, `404 Not Found`
pub async fn assignment_stats(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Path(assignment_id): Path<i64>,
) -> Response {
    let service = AnalyticsService::new(app_state.db_clone());
    match service.assignment_stats_for(&user.requester(), assignment_id).await {
        Ok(stats) => Json(ApiResponse::success(stats, "Assignment stats computed")).into_response(),
        Err(e) => analytics_error_response(e),
    }
}

/// GET /api/analytics/student/{student_id}/progress
///
/// Students see only themselves; professors see students enrolled in one of
/// their courses; admins see everyone. An unknown student id yields zero
/// counts rather than `404`.
///
/// ### Responses
/// - `200 OK` with `{ student_id, total_submission_records, submitted, late, missing,
///   submission_rate, late_rate, missing_rate, student_average }`
/// - `401 Unauthorized`, `403 Forbidden`
pub async fn student_progress(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Path(student_id): Path<i64>,
) -> Response {
    let service = AnalyticsService::new(app_state.db_clone());
    match service.student_progress_for(&user.requester(), student_id).await {
        Ok(progress) => {
            Json(ApiResponse::success(progress, "Student progress computed")).into_response()
        }
        Err(e) => analytics_error_response(e),
    }
}
