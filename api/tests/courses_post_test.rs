mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::course::Entity as CourseEntity;
use db::models::user::Model as UserModel;
use helpers::app::{TestApp, get_json, login, make_test_app};
use sea_orm::{EntityTrait, PaginatorTrait};
use serial_test::serial;
use tower::ServiceExt;
use util::config::AppConfig;
use util::roles::Role;

const BOUNDARY: &str = "xw9ab3test7boundary";

async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> (UserModel, UserModel) {
    let teacher = UserModel::create(db, "teacher@test.com", "password1", "Tamar", Role::Teacher)
        .await
        .unwrap();
    let student = UserModel::create(db, "student@test.com", "password2", "Sam", Role::Student)
        .await
        .unwrap();
    (teacher, student)
}

/// Builds a multipart/form-data body from text fields and file parts.
fn multipart_body(texts: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in texts {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, filename, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_course(app: &TestApp, token: &str, body: Vec<u8>) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/courses")
        .header("Authorization", format!("Bearer {token}"))
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Test Case: A teacher creates a course with an image but no document
#[tokio::test]
#[serial]
async fn test_create_course_with_image_only() {
    let storage = tempfile::tempdir().unwrap();
    AppConfig::set_upload_storage_root(storage.path().to_str().unwrap());

    let (app, app_state) = make_test_app().await;
    let (teacher, _) = setup_test_data(app_state.db()).await;
    let token = login(&app, "teacher@test.com", "password1").await;

    let body = multipart_body(
        &[("title", "Algebra 101"), ("description", "Linear algebra")],
        &[("image", "cover.png", b"\x89PNG fake image bytes")],
    );
    let (status, json) = post_course(&app, &token, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Course created successfully");
    assert_eq!(json["data"]["title"], "Algebra 101");
    assert_eq!(json["data"]["teacher_id"], teacher.id);
    assert_eq!(json["data"]["teacher_email"], "teacher@test.com");

    // Image slot filled, document slot empty string (never null)
    let image_url = json["data"]["image_url"].as_str().unwrap();
    assert!(image_url.starts_with("/uploads/"));
    assert!(image_url.ends_with(".png"));
    assert_eq!(json["data"]["document_url"], "");

    // The stored file is served back under its public URL
    let req = Request::builder()
        .method("GET")
        .uri(image_url)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"\x89PNG fake image bytes");

    AppConfig::reset();
}

/// Test Case: A student cannot create a course and no row is written
#[tokio::test]
async fn test_create_course_forbidden_for_students() {
    let (app, app_state) = make_test_app().await;
    setup_test_data(app_state.db()).await;
    let token = login(&app, "student@test.com", "password2").await;

    let body = multipart_body(
        &[("title", "Sneaky"), ("description", "Not allowed")],
        &[],
    );
    let (status, json) = post_course(&app, &token, body).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Teacher access required");

    let count = CourseEntity::find().count(app_state.db()).await.unwrap();
    assert_eq!(count, 0);
}

/// Test Case: Missing or empty required fields are rejected
#[tokio::test]
async fn test_create_course_missing_fields() {
    let (app, app_state) = make_test_app().await;
    setup_test_data(app_state.db()).await;
    let token = login(&app, "teacher@test.com", "password1").await;

    let body = multipart_body(&[("title", "Algebra 101")], &[]);
    let (status, json) = post_course(&app, &token, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Title and description are required");

    let body = multipart_body(&[("title", ""), ("description", "fine")], &[]);
    let (status, _) = post_course(&app, &token, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let count = CourseEntity::find().count(app_state.db()).await.unwrap();
    assert_eq!(count, 0);
}

/// Test Case: Whitespace-only fields pass the presence check
///
/// Truthiness-only validation is the documented contract; this pins the
/// behavior so a future tightening shows up as a deliberate change.
#[tokio::test]
async fn test_create_course_whitespace_title_accepted() {
    let (app, app_state) = make_test_app().await;
    setup_test_data(app_state.db()).await;
    let token = login(&app, "teacher@test.com", "password1").await;

    let body = multipart_body(&[("title", "   "), ("description", "desc")], &[]);
    let (status, json) = post_course(&app, &token, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "   ");
}

/// Test Case: A second file in the same slot is rejected
#[tokio::test]
async fn test_create_course_rejects_second_image() {
    let (app, app_state) = make_test_app().await;
    setup_test_data(app_state.db()).await;
    let token = login(&app, "teacher@test.com", "password1").await;

    let body = multipart_body(
        &[("title", "Algebra 101"), ("description", "Linear algebra")],
        &[
            ("image", "a.png", b"one"),
            ("image", "b.png", b"two"),
        ],
    );
    let (status, json) = post_course(&app, &token, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "At most one image may be uploaded per request");

    let count = CourseEntity::find().count(app_state.db()).await.unwrap();
    assert_eq!(count, 0);
}

/// Test Case: A created course with no files lists empty URL strings
#[tokio::test]
async fn test_create_course_without_files() {
    let (app, app_state) = make_test_app().await;
    setup_test_data(app_state.db()).await;
    let token = login(&app, "teacher@test.com", "password1").await;

    let body = multipart_body(
        &[("title", "Biology 201"), ("description", "Cell biology")],
        &[],
    );
    let (status, json) = post_course(&app, &token, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["image_url"], "");
    assert_eq!(json["data"]["document_url"], "");

    // Visible in the owner's my-courses afterwards
    let (status, json) = get_json(&app, "/api/my-courses", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Biology 201");
}
