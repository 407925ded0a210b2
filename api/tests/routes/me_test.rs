#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, get_request, make_test_app, seed_school};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::user;
    use tower::ServiceExt;

    #[tokio::test]
    async fn me_returns_the_identified_user() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;

        let response = app
            .oneshot(get_request("/api/me", Some(school.prof_a.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["id"], school.prof_a.id);
        assert_eq!(json["data"]["name"], "Prof A");
        assert_eq!(json["data"]["role"], "PROF");
    }

    #[tokio::test]
    async fn me_without_header_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get_request("/api/me", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn me_with_unknown_or_garbage_id_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(get_request("/api/me", Some(424242)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let req = Request::builder()
            .method("GET")
            .uri("/api/me")
            .header("X-User-Id", "not-a-number")
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn users_are_listed_without_identity() {
        let (app, app_state) = make_test_app().await;
        let school = seed_school(app_state.db()).await;
        user::Model::create_with_role_text(app_state.db(), "Ghost", "TA")
            .await
            .unwrap();

        let response = app.oneshot(get_request("/api/users", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let users = json["data"].as_array().unwrap();
        assert_eq!(users.len(), 6);
        assert_eq!(users[0]["id"], school.admin.id);
        assert_eq!(users[0]["role"], "ADMIN");
        assert_eq!(users[5]["role"], "TA");
    }
}
