use api::routes::auth::auth_routes;
use api::routes::routes;
use api::routes::uploads::get::serve_upload;
use axum::{Router, body::Body, http::Request, response::Response, routing::get};
use db::test_utils::setup_test_db;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::{session::SessionStore, state::AppState};

pub type TestApp = BoxCloneService<Request<Body>, Response, Infallible>;

/// Builds the real application router over a fresh in-memory database.
///
/// Mirrors the assembly in `main.rs` minus the request-logging layer,
/// which needs a live socket for `ConnectInfo`.
pub async fn make_test_app() -> (TestApp, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db, SessionStore::new());

    let router: Router = Router::new()
        .merge(auth_routes())
        .route("/uploads/{filename}", get(serve_upload))
        .nest("/api", routes(app_state.clone()))
        .with_state(app_state.clone());

    (router.into_service().boxed_clone(), app_state)
}

/// Logs in through the real endpoint and returns the session token.
pub async fn login(app: &TestApp, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(
        response.status(),
        axum::http::StatusCode::OK,
        "login for {email} should succeed"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    json["data"]["token"].as_str().unwrap().to_string()
}

/// Shorthand for an authenticated JSON GET against the test app.
pub async fn get_json(app: &TestApp, uri: &str, token: &str) -> (axum::http::StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}
