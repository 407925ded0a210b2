use axum::{Router, routing::get};
use get::{get_course, list_courses};
use util::state::AppState;

pub mod get;

/// - `GET /courses` → `list_courses`
/// - `GET /courses/{course_id}` → `get_course`
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/{course_id}", get(get_course))
}
