use api::auth::USER_ID_HEADER;
use api::routes::routes;
use axum::{
    Router,
    body::Body,
    http::Request,
    response::Response,
};
use db::test_utils::setup_test_db;
use serde_json::Value;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::state::AppState;

/// The production router over a fresh, migrated in-memory database.
pub async fn make_test_app() -> (BoxCloneService<Request<Body>, Response, Infallible>, AppState) {
    let app_state = AppState::new(setup_test_db().await);

    let router = Router::new().nest("/api", routes(app_state.clone()));

    (router.into_service().boxed_clone(), app_state)
}

/// `GET uri`, optionally identifying as `user_id`.
pub fn get_request(uri: &str, user_id: Option<i64>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(id) = user_id {
        builder = builder.header(USER_ID_HEADER, id.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
