use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{assignment, course};
use sea_orm::{EntityTrait, ModelTrait, QueryOrder};
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub instructor_id: Option<i64>,
}

impl From<course::Model> for CourseResponse {
    fn from(course: course::Model) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
            instructor_id: course.instructor_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: i64,
    pub title: String,
    pub due_date: String,
}

impl From<assignment::Model> for AssignmentResponse {
    fn from(assignment: assignment::Model) -> Self {
        Self {
            id: assignment.id,
            title: assignment.title,
            due_date: assignment.due_date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct CourseDetailResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub instructor_id: Option<i64>,
    pub assignments: Vec<AssignmentResponse>,
}

/// GET /api/courses
///
/// ### Responses
/// - `200 OK` with `[{ id, code, name, instructor_id }]`
/// - `500 Internal Server Error`
pub async fn list_courses(State(app_state): State<AppState>) -> impl IntoResponse {
    match course::Entity::find()
        .order_by_asc(course::Column::Id)
        .all(app_state.db())
        .await
    {
        Ok(courses) => {
            let courses: Vec<CourseResponse> =
                courses.into_iter().map(CourseResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(courses, "Courses retrieved successfully")),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to list courses");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<CourseResponse>>::error("Failed to retrieve courses")),
            )
        }
    }
}

/// GET /api/courses/{course_id}
///
/// A course with its assignments ordered by id.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "code": "INF101",
///     "name": "Intro au génie logiciel",
///     "instructor_id": 2,
///     "assignments": [{ "id": 1, "title": "Devoir 1", "due_date": "2026-01-12T09:00:00+00:00" }]
///   },
///   "message": "Course retrieved successfully"
/// }
/// ```
/// - `404 Not Found`
/// - `500 Internal Server Error`
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let course = match course::Entity::find_by_id(course_id).one(db).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<CourseDetailResponse>::error("Course not found")),
            );
        }
        Err(e) => {
            tracing::error!(error = %e, course_id, "failed to load course");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve course")),
            );
        }
    };

    let assignments = match course
        .find_related(assignment::Entity)
        .order_by_asc(assignment::Column::Id)
        .all(db)
        .await
    {
        Ok(assignments) => assignments,
        Err(e) => {
            tracing::error!(error = %e, course_id, "failed to load assignments");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve course")),
            );
        }
    };

    let detail = CourseDetailResponse {
        id: course.id,
        code: course.code,
        name: course.name,
        instructor_id: course.instructor_id,
        assignments: assignments
            .into_iter()
            .map(AssignmentResponse::from)
            .collect(),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(detail, "Course retrieved successfully")),
    )
}
