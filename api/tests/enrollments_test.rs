mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::course::Model as CourseModel;
use db::models::enrollment::Model as EnrollmentModel;
use db::models::user::Model as UserModel;
use helpers::app::{TestApp, get_json, login, make_test_app};
use serde_json::json;
use tower::ServiceExt;
use util::roles::Role;

struct TestData {
    student: UserModel,
    algebra: CourseModel,
}

async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
    let teacher = UserModel::create(db, "teacher@test.com", "password1", "Tamar", Role::Teacher)
        .await
        .unwrap();
    let student = UserModel::create(db, "student@test.com", "password2", "Sam", Role::Student)
        .await
        .unwrap();
    let algebra = CourseModel::create(db, "Algebra 101", "Linear algebra", "", "", teacher.id, &teacher.email)
        .await
        .unwrap();

    TestData { student, algebra }
}

async fn post_enrollment(
    app: &TestApp,
    token: &str,
    path: &str,
    course_id: i64,
) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "courseId": course_id }).to_string()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Test Case: A student follows a course and it shows up in my-courses
#[tokio::test]
async fn test_follow_course() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(app_state.db()).await;
    let token = login(&app, "student@test.com", "password2").await;

    let (status, json) = post_enrollment(&app, &token, "/api/follow-course", data.algebra.id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Course followed successfully");

    let (status, json) = get_json(&app, "/api/my-courses", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["id"], data.algebra.id);
}

/// Test Case: Teachers cannot follow courses
#[tokio::test]
async fn test_follow_course_forbidden_for_teachers() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(app_state.db()).await;
    let token = login(&app, "teacher@test.com", "password1").await;

    let (status, json) = post_enrollment(&app, &token, "/api/follow-course", data.algebra.id).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Student access required");
}

/// Test Case: Unfollow removes the enrollment
#[tokio::test]
async fn test_unfollow_course() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(app_state.db()).await;
    let token = login(&app, "student@test.com", "password2").await;

    EnrollmentModel::follow(app_state.db(), data.student.id, data.algebra.id)
        .await
        .unwrap();

    let (status, json) =
        post_enrollment(&app, &token, "/api/unfollow-course", data.algebra.id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Course unfollowed successfully");

    let followed = EnrollmentModel::followed_course_ids(app_state.db(), data.student.id)
        .await
        .unwrap();
    assert!(followed.is_empty());
}

/// Test Case: Unfollowing a course that was never followed still succeeds
#[tokio::test]
async fn test_unfollow_is_idempotent() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(app_state.db()).await;
    let token = login(&app, "student@test.com", "password2").await;

    let (status, json) =
        post_enrollment(&app, &token, "/api/unfollow-course", data.algebra.id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    // And again, for good measure
    let (status, _) = post_enrollment(&app, &token, "/api/unfollow-course", data.algebra.id).await;
    assert_eq!(status, StatusCode::OK);
}

/// Test Case: Following the same course twice surfaces the store's
/// uniqueness constraint as an upstream failure
#[tokio::test]
async fn test_duplicate_follow_is_a_store_error() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(app_state.db()).await;
    let token = login(&app, "student@test.com", "password2").await;

    let (status, _) = post_enrollment(&app, &token, "/api/follow-course", data.algebra.id).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = post_enrollment(&app, &token, "/api/follow-course", data.algebra.id).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
}
