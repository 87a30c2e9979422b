use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, CreateUserResponseDto, UpdateUserDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, RoleName, ADMIN_ACCESS, ANY_ROLE},
        model::user::{CreateUserParam, UpdateUserParam},
        service::user::{UserService, USERNAME_TAKEN_MESSAGE},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The caller with role name and liked genre names
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/user/self",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_self(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(ANY_ROLE)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a user by id.
///
/// # Access Control
/// - Any authenticated user for their own id
/// - `Admin` for every other id
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Id of the user to fetch
///
/// # Returns
/// - `200 OK` - The requested user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Another user's id without admin role
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path?;

    let guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    let caller = guard.require(ANY_ROLE).await?;

    if caller.id == user_id {
        return Ok((StatusCode::OK, Json(caller.into_dto())));
    }

    if caller.role_name != RoleName::Admin.as_str() {
        return Err(AuthError::AccessDenied(
            caller.id,
            format!("read user {} without admin role", user_id),
        )
        .into());
    }

    let user_service = UserService::new(&state.db, &state.credentials);

    let Some(user) = user_service.get_by_id(user_id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Partially update a user.
///
/// Only fields present in the body change. `liked_genre_ids` replaces the whole set.
///
/// # Access Control
/// - The user themselves
/// - `Admin` for every user
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid field, unknown role id or genre id
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Another user's id without admin role
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - New username already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid update data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to update this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path?;
    let Json(payload) = payload?;

    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(ANY_ROLE)
        .await?;

    if caller.id != user_id && caller.role_name != RoleName::Admin.as_str() {
        return Err(AuthError::UpdateNotPermitted(caller.id, user_id).into());
    }

    let params = UpdateUserParam::from_dto(payload)?;

    let user_service = UserService::new(&state.db, &state.credentials);
    let user = user_service.update(user_id, params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create a user with the default `user` role.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Confirmation message and the new user's id
/// - `400 Bad Request` - Empty or over-long username or password
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `409 Conflict` - Username already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/user/",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = CreateUserResponseDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(ADMIN_ACCESS)
        .await?;

    let params = CreateUserParam::from_dto(payload)?;

    let user_service = UserService::new(&state.db, &state.credentials);

    if user_service.exists(&params.username).await? {
        return Err(AppError::Conflict(USERNAME_TAKEN_MESSAGE.to_string()));
    }

    let user = user_service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponseDto {
            message: "User created successfully, please login".to_string(),
            user_id: user.id,
        }),
    ))
}

/// Delete a user.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path?;

    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(ADMIN_ACCESS)
        .await?;

    let user_service = UserService::new(&state.db, &state.credentials);

    if !user_service.delete(user_id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
