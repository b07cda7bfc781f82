use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::course::Model as CourseModel;
use db::models::user::Model as UserModel;
use serde::Serialize;
use util::{roles::Role, state::AppState};

use crate::auth::AuthSession;
use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub document_url: String,
    pub teacher_id: i64,
    pub teacher_email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CourseModel> for CourseResponse {
    fn from(course: CourseModel) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            image_url: course.image_url,
            document_url: course.document_url,
            teacher_id: course.teacher_id,
            teacher_email: course.teacher_email,
            created_at: course.created_at.to_rfc3339(),
            updated_at: course.updated_at.to_rfc3339(),
        }
    }
}

/// A catalogue entry: the course plus its owner's display name.
#[derive(Debug, Serialize)]
pub struct DiscoverableCourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub document_url: String,
    pub teacher_id: i64,
    pub teacher_email: String,
    pub teacher_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl DiscoverableCourseResponse {
    fn from_parts(course: CourseModel, owner: Option<UserModel>) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            image_url: course.image_url,
            document_url: course.document_url,
            teacher_id: course.teacher_id,
            teacher_email: course.teacher_email,
            teacher_name: owner.map(|u| u.name).unwrap_or_default(),
            created_at: course.created_at.to_rfc3339(),
            updated_at: course.updated_at.to_rfc3339(),
        }
    }
}

/// GET /api/courses
///
/// The discoverable course catalogue, each entry annotated with the
/// owning teacher's display name. For students, courses they already
/// follow are excluded; teachers (and their own courses) see the full
/// catalogue. Entries are ordered by id.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "title": "Algebra 101",
///       "description": "Linear algebra from scratch",
///       "image_url": "/uploads/1754557890123-48130958.png",
///       "document_url": "",
///       "teacher_id": 1,
///       "teacher_email": "teacher@example.com",
///       "teacher_name": "Tamar Oren",
///       "created_at": "2026-08-07T09:00:00+00:00",
///       "updated_at": "2026-08-07T09:00:00+00:00"
///     }
///   ],
///   "message": "Courses retrieved successfully"
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
pub async fn list_courses(
    State(app_state): State<AppState>,
    Extension(AuthSession(session)): Extension<AuthSession>,
) -> impl IntoResponse {
    let db = app_state.db();

    let exclude_followed_for = match session.role {
        Role::Student => Some(session.user_id),
        Role::Teacher => None,
    };

    match CourseModel::find_discoverable(db, exclude_followed_for).await {
        Ok(rows) => {
            let courses: Vec<DiscoverableCourseResponse> = rows
                .into_iter()
                .map(|(course, owner)| DiscoverableCourseResponse::from_parts(course, owner))
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    courses,
                    "Courses retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<DiscoverableCourseResponse>>::error(
                format!("Database error: {}", e),
            )),
        )
            .into_response(),
    }
}

/// GET /api/my-courses
///
/// The caller's own slice of the catalogue, dispatched on the session
/// role: teachers get the courses they own, students the courses they
/// follow (joined through their enrollments, not the raw enrollment
/// rows). These are two distinct queries, not one parameterized query;
/// the join directions differ.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "title": "Algebra 101",
///       "description": "Linear algebra from scratch",
///       "image_url": "",
///       "document_url": "",
///       "teacher_id": 1,
///       "teacher_email": "teacher@example.com",
///       "created_at": "2026-08-07T09:00:00+00:00",
///       "updated_at": "2026-08-07T09:00:00+00:00"
///     }
///   ],
///   "message": "Courses retrieved successfully"
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
pub async fn get_my_courses(
    State(app_state): State<AppState>,
    Extension(AuthSession(session)): Extension<AuthSession>,
) -> impl IntoResponse {
    let db = app_state.db();

    let result = match session.role {
        Role::Teacher => CourseModel::owned_by(db, session.user_id).await,
        Role::Student => CourseModel::followed_by(db, session.user_id).await,
    };

    match result {
        Ok(courses) => {
            let courses: Vec<CourseResponse> =
                courses.into_iter().map(CourseResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    courses,
                    "Courses retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<CourseResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        )
            .into_response(),
    }
}
