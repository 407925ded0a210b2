//! `/analytics`: access-checked statistics.
//!
//! Every handler runs behind `allow_authenticated`, then hands the resolved
//! requester to `AnalyticsService`, which checks existence before access and
//! access before aggregating.

use axum::{Router, routing::get};
use get::{assignment_stats, course_summary, student_progress};
use util::state::AppState;

pub mod get;

/// - `GET /analytics/course/{course_id}/summary` → `course_summary`
/// - `GET /analytics/assignment/{assignment_id}/stats` → `assignment_stats`
/// - `GET /analytics/student/{student_id}/progress` → `student_progress`
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/course/{course_id}/summary", get(course_summary))
        .route("/assignment/{assignment_id}/stats", get(assignment_stats))
        .route("/student/{student_id}/progress", get(student_progress))
}
