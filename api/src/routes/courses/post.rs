use axum::{
    Extension, Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::course::Model as CourseModel;
use util::{paths, state::AppState};

use crate::auth::AuthSession;
use crate::response::ApiResponse;
use crate::routes::courses::get::CourseResponse;

/// One named upload slot of the creation form: original filename + bytes.
struct UploadedFile {
    original_name: String,
    bytes: Vec<u8>,
}

/// POST /api/courses
///
/// Create a course owned by the calling teacher. Accepts multipart form
/// data with two text fields and up to two file slots. Uploaded files are
/// stored under randomized names and recorded on the course row as
/// `/uploads/...` URLs; a slot with no file yields an empty string, not
/// null.
///
/// ### Request Body (Multipart Form Data)
/// - `title` (string, required, non-empty)
/// - `description` (string, required, non-empty)
/// - `image` (file, optional): cover image, at most one
/// - `document` (file, optional): course document, at most one
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 7,
///     "title": "Algebra 101",
///     "description": "Linear algebra from scratch",
///     "image_url": "/uploads/1754557890123-48130958.png",
///     "document_url": "",
///     "teacher_id": 1,
///     "teacher_email": "teacher@example.com",
///     "created_at": "2026-08-07T09:00:00+00:00",
///     "updated_at": "2026-08-07T09:00:00+00:00"
///   },
///   "message": "Course created successfully"
/// }
/// ```
///
/// - `400 Bad Request`
/// ```json
/// {
///   "success": false,
///   "message": "Title and description are required" // or "At most one image may be uploaded per request"
/// }
/// ```
///
/// - `403 Forbidden` (non-teacher, rejected by the route guard)
///
/// - `500 Internal Server Error`
/// ```json
/// {
///   "success": false,
///   "message": "Failed to save uploaded file" // or "Database error: ..."
/// }
/// ```
pub async fn create_course(
    State(app_state): State<AppState>,
    Extension(AuthSession(session)): Extension<AuthSession>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let db = app_state.db();

    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut image: Option<UploadedFile> = None;
    let mut document: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.unwrap_or(None) {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => {
                title = field.text().await.ok();
            }
            "description" => {
                description = field.text().await.ok();
            }
            "image" => {
                if image.is_some() {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::<CourseResponse>::error(
                            "At most one image may be uploaded per request",
                        )),
                    )
                        .into_response();
                }
                match read_file_field(field).await {
                    Ok(file) => image = file,
                    Err(response) => return response,
                }
            }
            "document" => {
                if document.is_some() {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::<CourseResponse>::error(
                            "At most one document may be uploaded per request",
                        )),
                    )
                        .into_response();
                }
                match read_file_field(field).await {
                    Ok(file) => document = file,
                    Err(response) => return response,
                }
            }
            _ => {}
        }
    }

    // Presence check only: empty strings are rejected, whitespace-only
    // values pass. Matches the upstream contract.
    let title = match title.filter(|t| !t.is_empty()) {
        Some(t) => t,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<CourseResponse>::error(
                    "Title and description are required",
                )),
            )
                .into_response();
        }
    };
    let description = match description.filter(|d| !d.is_empty()) {
        Some(d) => d,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<CourseResponse>::error(
                    "Title and description are required",
                )),
            )
                .into_response();
        }
    };

    let image_url = match store_upload(image) {
        Ok(url) => url,
        Err(response) => return response,
    };
    let document_url = match store_upload(document) {
        Ok(url) => url,
        Err(response) => return response,
    };

    match CourseModel::create(
        db,
        &title,
        &description,
        &image_url,
        &document_url,
        session.user_id,
        &session.username,
    )
    .await
    {
        Ok(course) => {
            tracing::info!(course_id = course.id, teacher_id = session.user_id, "Course created");
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    CourseResponse::from(course),
                    "Course created successfully",
                )),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<CourseResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        )
            .into_response(),
    }
}

/// Reads one file field into memory. A part with no filename is an empty
/// form input, treated as "no file supplied" rather than an error.
async fn read_file_field(
    field: axum::extract::multipart::Field<'_>,
) -> Result<Option<UploadedFile>, axum::response::Response> {
    let original_name = field.file_name().unwrap_or("").to_string();
    if original_name.is_empty() {
        return Ok(None);
    }

    match field.bytes().await {
        Ok(bytes) => Ok(Some(UploadedFile {
            original_name,
            bytes: bytes.to_vec(),
        })),
        Err(_) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<CourseResponse>::error(
                "Failed to read uploaded file",
            )),
        )
            .into_response()),
    }
}

/// Writes an upload slot to storage and returns its public URL, or `""`
/// when the slot was empty.
fn store_upload(file: Option<UploadedFile>) -> Result<String, axum::response::Response> {
    let Some(file) = file else {
        return Ok(String::new());
    };

    let filename = paths::generate_upload_filename(&file.original_name);
    let write_result =
        paths::ensure_upload_storage().and_then(|_| std::fs::write(paths::upload_path(&filename), &file.bytes));

    match write_result {
        Ok(()) => Ok(paths::public_upload_url(&filename)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to persist uploaded file");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<CourseResponse>::error(
                    "Failed to save uploaded file",
                )),
            )
                .into_response())
        }
    }
}
