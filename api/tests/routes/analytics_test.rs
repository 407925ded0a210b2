#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, get_request, make_test_app, seed_school};
    use axum::http::StatusCode;
    use db::models::user;
    use tower::ServiceExt;

    // --- GET /api/analytics/course/{course_id}/summary ---

    #[tokio::test]
    async fn instructor_gets_course_summary() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let uri = format!("/api/analytics/course/{}/summary", school.inf101.id);
        let response = app.oneshot(get_request(&uri, Some(school.prof_a.id))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let data = &json["data"];
        assert_eq!(data["course"]["code"], "INF101");
        assert_eq!(data["students"], 1);
        assert_eq!(data["assignments"], 1);
        assert_eq!(data["total_submission_records"], 1);
        assert_eq!(data["submitted"], 1);
        assert_eq!(data["submission_rate"], 1.0);
        assert_eq!(data["late_rate"], 0.0);
        assert_eq!(data["course_average"], 80.0);
    }

    #[tokio::test]
    async fn enrolled_student_and_admin_get_course_summary() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;
        let uri = format!("/api/analytics/course/{}/summary", school.fin305.id);

        for requester in [school.bob.id, school.admin.id, school.prof_b.id] {
            let response = app
                .clone()
                .oneshot(get_request(&uri, Some(requester)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "requester {requester}");
        }
    }

    #[tokio::test]
    async fn non_enrolled_student_is_forbidden_not_zeroed() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let uri = format!("/api/analytics/course/{}/summary", school.fin305.id);
        let response = app.oneshot(get_request(&uri, Some(school.alice.id))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert!(json["data"].get("students").is_none());
    }

    #[tokio::test]
    async fn other_professor_is_forbidden() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let uri = format!("/api/analytics/course/{}/summary", school.inf101.id);
        let response = app.oneshot(get_request(&uri, Some(school.prof_b.id))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unknown_role_is_forbidden() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;
        let ta = user::Model::create_with_role_text(app_state.db(), "TA", "TA")
            .await
            .unwrap();

        let uri = format!("/api/analytics/course/{}/summary", school.inf101.id);
        let response = app.oneshot(get_request(&uri, Some(ta.id))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn missing_course_is_not_found_even_for_outsiders() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let response = app
            .oneshot(get_request("/api/analytics/course/9999/summary", Some(school.alice.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn analytics_require_identity() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let uri = format!("/api/analytics/course/{}/summary", school.inf101.id);
        let response = app.clone().oneshot(get_request(&uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.oneshot(get_request(&uri, Some(9999))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // --- GET /api/analytics/assignment/{assignment_id}/stats ---

    #[tokio::test]
    async fn assignment_stats_follow_course_access() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;
        let uri = format!("/api/analytics/assignment/{}/stats", school.fin305_a1.id);

        let response = app
            .clone()
            .oneshot(get_request(&uri, Some(school.bob.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["assignment_id"], school.fin305_a1.id);
        assert_eq!(json["data"]["total_records"], 1);
        assert_eq!(json["data"]["late"], 1);
        assert_eq!(json["data"]["average"], 60.0);
        assert_eq!(json["data"]["min"], 60.0);
        assert_eq!(json["data"]["max"], 60.0);

        let response = app
            .clone()
            .oneshot(get_request(&uri, Some(school.prof_a.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app
            .oneshot(get_request("/api/analytics/assignment/9999/stats", Some(school.admin.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // --- GET /api/analytics/student/{student_id}/progress ---

    #[tokio::test]
    async fn student_sees_own_progress_only() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let own = format!("/api/analytics/student/{}/progress", school.alice.id);
        let response = app
            .clone()
            .oneshot(get_request(&own, Some(school.alice.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["student_id"], school.alice.id);
        assert_eq!(json["data"]["total_submission_records"], 1);
        assert_eq!(json["data"]["student_average"], 80.0);

        let other = format!("/api/analytics/student/{}/progress", school.bob.id);
        let response = app.oneshot(get_request(&other, Some(school.alice.id))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn professor_sees_students_of_own_courses() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let alice = format!("/api/analytics/student/{}/progress", school.alice.id);
        let response = app
            .clone()
            .oneshot(get_request(&alice, Some(school.prof_a.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bob = format!("/api/analytics/student/{}/progress", school.bob.id);
        let response = app.oneshot(get_request(&bob, Some(school.prof_a.id))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn admin_gets_zeroed_progress_for_unknown_student() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let response = app
            .oneshot(get_request("/api/analytics/student/9999/progress", Some(school.admin.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total_submission_records"], 0);
        assert_eq!(json["data"]["submission_rate"], 0.0);
        assert!(json["data"]["student_average"].is_null());
    }
}
