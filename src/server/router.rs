//! Route table and OpenAPI document.

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AccessTokenDto, LoginForm},
        game::GameDto,
        user::{CreateUserDto, CreateUserResponseDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{
            auth::{self, login},
            game::{self, get_games, get_recommendations},
            user::{self, create_user, delete_user, get_self, get_user, update_user},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        game::get_games,
        game::get_recommendations,
        user::get_self,
        user::get_user,
        user::update_user,
        user::create_user,
        user::delete_user,
    ),
    components(schemas(
        ErrorDto,
        LoginForm,
        AccessTokenDto,
        GameDto,
        UserDto,
        CreateUserDto,
        CreateUserResponseDto,
        UpdateUserDto,
    )),
    modifiers(&BearerSecurity),
)]
pub struct ApiDoc;

/// Registers the `bearer` HTTP security scheme referenced by protected paths.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/games", get(get_games))
        .route("/games/", get(get_games))
        .route("/games/recommendations", get(get_recommendations))
        .route("/user", post(create_user))
        .route("/user/", post(create_user))
        .route("/user/self", get(get_self))
        .route(
            "/user/{user_id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/api-docs/openapi.json", get(openapi))
}
