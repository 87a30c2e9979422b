use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, game::GameDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, EDITOR_ACCESS},
        model::game::PageParam,
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "games";

const DEFAULT_LIST_LIMIT: u64 = 10;
const DEFAULT_RECOMMENDATION_LIMIT: u64 = 20;

#[derive(Deserialize)]
pub struct PaginationParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// List games in catalog order.
///
/// # Access Control
/// - `Admin`, `Editor`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Limit (1 to 100, default 10) and offset (default 0)
///
/// # Returns
/// - `200 OK` - Games with their genres, teams and reviews
/// - `400 Bad Request` - Limit out of range or malformed query
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not admitted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/",
    tag = GAME_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 10)"),
        ("offset" = Option<u64>, Query, description = "Items to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_games(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(EDITOR_ACCESS)
        .await?;

    let page = PageParam::resolve(params.limit, params.offset, DEFAULT_LIST_LIMIT)?;

    let games = GameService::new(&state.db).list(page).await?;

    let games_dto: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}

/// Recommend games sharing a genre with the caller's liked genres.
///
/// Returns an empty list when the caller likes no genres.
///
/// # Access Control
/// - `Admin`, `Editor`
///
/// # Returns
/// - `200 OK` - Matching games, highest rating first
/// - `400 Bad Request` - Limit out of range or malformed query
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not admitted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/recommendations",
    tag = GAME_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 20)"),
        ("offset" = Option<u64>, Query, description = "Items to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved recommendations", body = Vec<GameDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(EDITOR_ACCESS)
        .await?;

    let page = PageParam::resolve(params.limit, params.offset, DEFAULT_RECOMMENDATION_LIMIT)?;

    let games = GameService::new(&state.db).recommend(user.id, page).await?;

    let games_dto: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}
