#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, get_request, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    fn seed_request(body: serde_json::Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri("/api/seed")
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn seeds_then_refuses_a_second_run() {
        let (app, _) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(seed_request(json!({ "students": 8, "rng_seed": 5 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["users"], 11);
        assert_eq!(json["data"]["courses"], 3);
        assert_eq!(json["data"]["assignments"], 15);

        let response = app.clone().oneshot(seed_request(json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app.oneshot(get_request("/api/courses", None)).await.unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn seeded_admin_can_read_every_summary() {
        let (app, _) = make_test_app().await;
        app.clone()
            .oneshot(seed_request(json!({ "students": 5, "rng_seed": 11 })))
            .await
            .unwrap();

        // The admin is the first user created.
        for course_id in 1..=3 {
            let uri = format!("/api/analytics/course/{course_id}/summary");
            let response = app.clone().oneshot(get_request(&uri, Some(1))).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = get_json_body(response).await;
            let data = &json["data"];
            let total = data["total_submission_records"].as_u64().unwrap();
            let parts = data["submitted"].as_u64().unwrap()
                + data["late"].as_u64().unwrap()
                + data["missing"].as_u64().unwrap();
            assert_eq!(total, parts);
            assert_eq!(total, data["students"].as_u64().unwrap() * 5);
        }
    }

    #[tokio::test]
    async fn post_without_body_uses_defaults() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/seed")
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["users"], 33);
        assert_eq!(json["data"]["courses"], 3);
        assert_eq!(json["data"]["assignments"], 15);
    }

    #[tokio::test]
    async fn rejects_out_of_range_student_count() {
        let (app, _) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(seed_request(json!({ "students": 0 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "students must be between 1 and 500");

        let response = app
            .oneshot(seed_request(json!({ "students": 501 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
