use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned for every token failure so callers cannot tell them apart.
const INVALID_CREDENTIALS_MESSAGE: &str = "Could not validate credentials";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on the request.
    #[error("Request has no bearer token")]
    MissingToken,

    /// Token failed signature, expiry or claim validation.
    ///
    /// # Fields
    /// - Reason reported by the token service, logged only
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token subject refers to a user id that no longer exists.
    #[error("User {0} from token subject not found in database")]
    UserNotInDatabase(i32),

    /// Login with an unknown username or a wrong password.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Authenticated user's role is not in the set the route allows.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Description of the denied action, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Non-admin user attempted to update another user.
    ///
    /// # Fields
    /// - User id of the caller
    /// - User id of the target
    #[error("User {0} attempted to update user {1} without admin role")]
    UpdateNotPermitted(i32, i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to HTTP status codes and client-facing messages:
/// - `MissingToken` → 401 with "Not authenticated"
/// - `InvalidToken` / `UserNotInDatabase` → 401 with "Could not validate credentials"
/// - `InvalidCredentials` → 401 with "Incorrect username or password"
/// - `AccessDenied` / `UpdateNotPermitted` → 403 Forbidden
///
/// Every 401 carries a `WWW-Authenticate: Bearer` header. All errors are logged at
/// debug level for diagnostics while keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => unauthorized("Not authenticated"),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                unauthorized(INVALID_CREDENTIALS_MESSAGE)
            }
            Self::InvalidCredentials => unauthorized("Incorrect username or password"),
            Self::AccessDenied(_, _) => forbidden("You don't have permission to access this resource"),
            Self::UpdateNotPermitted(_, _) => {
                forbidden("You do not have permission to update this user")
            }
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn forbidden(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}
