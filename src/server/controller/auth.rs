use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AccessTokenDto, LoginForm},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange username and password for a bearer token.
///
/// # Arguments
/// - `state` - Application state containing the database and token services
/// - `form` - Form-encoded username and password
///
/// # Returns
/// - `200 OK` - Access token with token type `bearer`
/// - `400 Bad Request` - Missing or malformed form fields
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Successfully logged in", body = AccessTokenDto),
        (status = 400, description = "Malformed login form", body = ErrorDto),
        (status = 401, description = "Incorrect username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = form?;

    let auth_service = AuthService::new(&state.db, &state.tokens, &state.credentials);

    let access_token = auth_service.login(&form.username, &form.password).await?;

    Ok((
        StatusCode::OK,
        Json(AccessTokenDto {
            access_token,
            token_type: "bearer".to_string(),
        }),
    ))
}
