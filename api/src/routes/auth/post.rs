use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub username: String,
}

/// POST /login
///
/// Authenticate a user and establish a server-side session. The returned
/// token must be presented as `Authorization: Bearer <token>` on every
/// subsequent request. Logging in never invalidates other sessions, so
/// the same account can be signed in from several clients at once.
///
/// ### Request Body
/// ```json
/// {
///   "email": "teacher@example.com",
///   "password": "password123"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "token": "3d5e1f0a-...",
///     "role": "teacher",
///     "username": "teacher@example.com"
///   },
///   "message": "Login successful"
/// }
/// ```
///
/// - `400 Bad Request` (missing fields)
/// ```json
/// {
///   "success": false,
///   "message": "Email is required"
/// }
/// ```
///
/// - `401 Unauthorized` (invalid credentials; unknown email and wrong
///   password are deliberately indistinguishable)
/// ```json
/// {
///   "success": false,
///   "message": "Invalid email or password"
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
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<LoginResponse>::error(error_message)),
        );
    }

    let db = app_state.db();

    let user = match UserModel::find_by_email(db, &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<LoginResponse>::error(
                    "Invalid email or password",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<LoginResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    if !user.verify_password(&req.password) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<LoginResponse>::error(
                "Invalid email or password",
            )),
        );
    }

    let token = app_state
        .sessions()
        .create(user.id, user.role.clone(), user.email.clone())
        .await;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            LoginResponse {
                token,
                role: user.role.to_string(),
                username: user.email,
            },
            "Login successful",
        )),
    )
}
