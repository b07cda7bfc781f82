use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::course::Entity as CourseEntity;
use sea_orm::{EntityTrait, ModelTrait};
use util::state::AppState;

use crate::auth::AuthSession;
use crate::response::ApiResponse;

/// DELETE /api/courses/{course_id}
///
/// Delete a course. The route guard admits any teacher; ownership is a
/// second, separate authorization layer checked here, so an
/// authenticated teacher deleting someone else's course is still
/// forbidden. Enrollments pointing at the course are removed by the
/// store's cascade, not by this handler. Stored upload files are left on
/// disk.
///
/// ### Path Parameters
/// - `course_id` (i64): The ID of the course to delete
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Course deleted successfully"
/// }
/// ```
///
/// - `403 Forbidden` (authenticated teacher, but not the owner)
/// ```json
/// {
///   "success": false,
///   "message": "You can only delete your own courses"
/// }
/// ```
///
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "message": "Course not found"
/// }
/// ```
///
/// - `500 Internal Server Error`
/// ```json
/// {
///   "success": false,
///   "message": "Database error: detailed error here"
/// }
/// ```
pub async fn delete_course(
    State(app_state): State<AppState>,
    Extension(AuthSession(session)): Extension<AuthSession>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let course = match CourseEntity::find_by_id(course_id).one(db).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Course not found")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    };

    if course.teacher_id != session.user_id {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error(
                "You can only delete your own courses",
            )),
        )
            .into_response();
    }

    match course.delete(db).await {
        Ok(_) => {
            tracing::info!(course_id, teacher_id = session.user_id, "Course deleted");
            (
                StatusCode::OK,
                Json(ApiResponse::success((), "Course deleted successfully")),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
