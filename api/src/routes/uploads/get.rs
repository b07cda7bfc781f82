use axum::{
    Json,
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use util::paths;

use crate::response::ApiResponse;

/// GET /uploads/{filename}
///
/// Streams a stored course upload with a guessed MIME type. Filenames are
/// the randomized names assigned at upload time; nothing else lives in
/// the storage root, so a flat single-segment lookup is all that is
/// needed. Path separators and parent references are rejected outright.
///
/// ### Responses
/// - `200 OK` — raw file bytes with `Content-Type` from the extension
/// - `400 Bad Request` — filename contains path separators or `..`
/// - `404 Not Found` — no such stored file
pub async fn serve_upload(Path(filename): Path<String>) -> impl IntoResponse {
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Invalid filename")),
        )
            .into_response();
    }

    let fs_path = paths::upload_path(&filename);

    if tokio::fs::metadata(&fs_path).await.is_err() {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("File not found")),
        )
            .into_response();
    }

    let mut file = match File::open(&fs_path).await {
        Ok(f) => f,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Could not open file")),
            )
                .into_response();
        }
    };

    let mut buffer = Vec::new();
    if file.read_to_end(&mut buffer).await.is_err() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error("Failed to read file")),
        )
            .into_response();
    }

    let mime = mime_guess::from_path(&fs_path)
        .first_or_octet_stream()
        .to_string();

    ([(header::CONTENT_TYPE, mime)], buffer).into_response()
}
