use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::enrollment::Model as EnrollmentModel;
use serde::Deserialize;
use util::state::AppState;

use crate::auth::AuthSession;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct EnrollmentRequest {
    #[serde(rename = "courseId")]
    pub course_id: i64,
}

/// POST /api/follow-course
///
/// Enroll the calling student in a course. No duplicate check is
/// performed here; following a course twice is rejected by the store's
/// uniqueness constraint and surfaces as a store error. Following a
/// nonexistent course fails the same way via the foreign key.
///
/// ### Request Body
/// ```json
/// { "courseId": 7 }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Course followed successfully"
/// }
/// ```
///
/// - `403 Forbidden` (non-student, rejected by the route guard)
///
/// - `500 Internal Server Error`
/// ```json
/// {
///   "success": false,
///   "message": "Database error: detailed error here"
/// }
/// ```
pub async fn follow_course(
    State(app_state): State<AppState>,
    Extension(AuthSession(session)): Extension<AuthSession>,
    Json(req): Json<EnrollmentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match EnrollmentModel::follow(db, session.user_id, req.course_id).await {
        Ok(_) => {
            tracing::info!(
                student_id = session.user_id,
                course_id = req.course_id,
                "Course followed"
            );
            (
                StatusCode::OK,
                Json(ApiResponse::success((), "Course followed successfully")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        ),
    }
}

/// POST /api/unfollow-course
///
/// Remove the calling student's enrollment in a course. Idempotent from
/// the caller's perspective: unfollowing a course that was never
/// followed still reports success.
///
/// ### Request Body
/// ```json
/// { "courseId": 7 }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Course unfollowed successfully"
/// }
/// ```
///
/// - `403 Forbidden` (non-student, rejected by the route guard)
///
/// - `500 Internal Server Error`
/// ```json
/// {
///   "success": false,
///   "message": "Database error: detailed error here"
/// }
/// ```
pub async fn unfollow_course(
    State(app_state): State<AppState>,
    Extension(AuthSession(session)): Extension<AuthSession>,
    Json(req): Json<EnrollmentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match EnrollmentModel::unfollow(db, session.user_id, req.course_id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Course unfollowed successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        ),
    }
}
