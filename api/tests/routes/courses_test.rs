#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, get_request, make_test_app, seed_school};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn lists_courses_with_instructors() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let response = app.oneshot(get_request("/api/courses", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let courses = json["data"].as_array().unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0]["code"], "INF101");
        assert_eq!(courses[0]["instructor_id"], school.prof_a.id);
        assert_eq!(courses[1]["code"], "FIN305");
    }

    #[tokio::test]
    async fn course_detail_includes_assignments() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let uri = format!("/api/courses/{}", school.inf101.id);
        let response = app.oneshot(get_request(&uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["name"], "Intro au génie logiciel");
        let assignments = json["data"]["assignments"].as_array().unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0]["id"], school.inf101_a1.id);
        assert_eq!(assignments[0]["title"], "Devoir 1");
        assert!(assignments[0]["due_date"].as_str().is_some());
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(get_request("/api/courses/9999", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Course not found");
    }
}
