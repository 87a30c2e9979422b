//! Application error hierarchy.
//!
//! Every handler returns `Result<_, AppError>`. Client mistakes map to 4xx with the
//! message in an `{"error": ...}` body; anything else is logged and reported as a
//! bare 500.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment variable at start-up.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// 401 or 403, see `AuthError`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Signing failure. Rejected tokens surface as `AuthError::InvalidToken` instead.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    HashErr(#[from] argon2::password_hash::Error),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message. Also used for unknown role or genre ids.
    #[error("{0}")]
    BadRequest(String),

    /// 409 with the given message, e.g. a duplicate username.
    #[error("{0}")]
    Conflict(String),

    /// 500; the message is logged, never sent.
    #[error("{0}")]
    InternalError(String),
}

/// Malformed request body. Surfaces as 400 with axum's explanation.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Malformed form body.
impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Non-numeric or negative query parameter.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Path segment that does not parse as an id.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_body(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_body(StatusCode::CONFLICT, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers 500 with a generic body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);

        error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
