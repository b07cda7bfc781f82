mod helpers;

use axum::http::StatusCode;
use db::models::course::Model as CourseModel;
use db::models::enrollment::Model as EnrollmentModel;
use db::models::user::Model as UserModel;
use helpers::app::{get_json, login, make_test_app};
use util::roles::Role;

struct TestData {
    teacher: UserModel,
    other_teacher: UserModel,
    student: UserModel,
    algebra: CourseModel,
    biology: CourseModel,
    history: CourseModel,
}

async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
    let teacher = UserModel::create(db, "teacher@test.com", "password1", "Tamar", Role::Teacher)
        .await
        .unwrap();
    let other_teacher = UserModel::create(db, "other@test.com", "password1", "Tariq", Role::Teacher)
        .await
        .unwrap();
    let student = UserModel::create(db, "student@test.com", "password2", "Sam", Role::Student)
        .await
        .unwrap();

    let algebra = CourseModel::create(db, "Algebra 101", "Linear algebra", "", "", teacher.id, &teacher.email)
        .await
        .unwrap();
    let biology = CourseModel::create(db, "Biology 201", "Cell biology", "", "", teacher.id, &teacher.email)
        .await
        .unwrap();
    let history = CourseModel::create(db, "World History", "From 1500", "", "", other_teacher.id, &other_teacher.email)
        .await
        .unwrap();

    TestData {
        teacher,
        other_teacher,
        student,
        algebra,
        biology,
        history,
    }
}

/// Test Case: A followed course disappears from the discoverable list and
/// shows up in my-courses as the joined course object
#[tokio::test]
async fn test_followed_course_moves_between_lists() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(app_state.db()).await;

    EnrollmentModel::follow(app_state.db(), data.student.id, data.algebra.id)
        .await
        .unwrap();

    let token = login(&app, "student@test.com", "password2").await;

    let (status, json) = get_json(&app, "/api/courses", &token).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![data.biology.id, data.history.id]);

    let (status, json) = get_json(&app, "/api/my-courses", &token).await;
    assert_eq!(status, StatusCode::OK);
    let mine = json["data"].as_array().unwrap();
    assert_eq!(mine.len(), 1);
    // The joined course object, not the raw enrollment row
    assert_eq!(mine[0]["id"], data.algebra.id);
    assert_eq!(mine[0]["title"], "Algebra 101");
    assert_eq!(mine[0]["teacher_id"], data.teacher.id);
    assert!(mine[0].get("student_id").is_none());
}

/// Test Case: Catalogue entries carry the owning teacher's display name
#[tokio::test]
async fn test_catalogue_annotates_teacher_name() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(app_state.db()).await;

    let token = login(&app, "student@test.com", "password2").await;

    let (status, json) = get_json(&app, "/api/courses", &token).await;
    assert_eq!(status, StatusCode::OK);
    let courses = json["data"].as_array().unwrap();
    assert_eq!(courses.len(), 3);

    let history = courses
        .iter()
        .find(|c| c["id"] == data.history.id)
        .expect("history course should be listed");
    assert_eq!(history["teacher_name"], "Tariq");
    assert_eq!(history["teacher_email"], data.other_teacher.email);
}

/// Test Case: Teachers see the full catalogue regardless of enrollments
#[tokio::test]
async fn test_teacher_catalogue_is_unfiltered() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(app_state.db()).await;

    EnrollmentModel::follow(app_state.db(), data.student.id, data.algebra.id)
        .await
        .unwrap();

    let token = login(&app, "teacher@test.com", "password1").await;

    let (status, json) = get_json(&app, "/api/courses", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

/// Test Case: A teacher's my-courses lists only owned courses
#[tokio::test]
async fn test_teacher_my_courses_scoped_to_owner() {
    let (app, app_state) = make_test_app().await;
    let data = setup_test_data(app_state.db()).await;

    let token = login(&app, "teacher@test.com", "password1").await;

    let (status, json) = get_json(&app, "/api/my-courses", &token).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![data.algebra.id, data.biology.id]);
}

/// Test Case: A student following nothing has an empty my-courses list
#[tokio::test]
async fn test_student_with_no_follows_has_empty_my_courses() {
    let (app, app_state) = make_test_app().await;
    setup_test_data(app_state.db()).await;

    let token = login(&app, "student@test.com", "password2").await;

    let (status, json) = get_json(&app, "/api/my-courses", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"].as_array().unwrap().is_empty());
}
