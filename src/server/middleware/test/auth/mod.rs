use axum::http::{header, HeaderMap, HeaderValue};
use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, ADMIN_ACCESS, ANY_ROLE, EDITOR_ACCESS},
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn tokens() -> TokenService {
    TokenService::new("guard-secret", Algorithm::HS256, 60)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
