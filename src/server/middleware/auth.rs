//! Bearer token authentication and role gating.
//!
//! Handlers construct an `AuthGuard` from the request headers and call `require` with
//! the roles the route admits. The guard resolves the token to a user in three steps
//! (header, signature and expiry, user lookup), each failing with 401, then checks the
//! user's role, failing with 403.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::UserProfile,
    service::token::TokenService,
};

/// Role names as stored in the `roles` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleName {
    Admin,
    Editor,
    User,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::User => "user",
        }
    }
}

/// Roles admitted to catalog endpoints.
pub const EDITOR_ACCESS: &[RoleName] = &[RoleName::Admin, RoleName::Editor];

/// Roles admitted to user management endpoints.
pub const ADMIN_ACCESS: &[RoleName] = &[RoleName::Admin];

/// Roles admitted to endpoints open to any signed-in user.
pub const ANY_ROLE: &[RoleName] = &[];

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the caller and checks their role.
    ///
    /// # Arguments
    /// - `roles` - Roles admitted to the route; empty admits every role
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Authenticated caller with role and liked genres loaded
    /// - `Err(AuthError::MissingToken)` - No bearer token in the `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or non-numeric subject
    /// - `Err(AuthError::UserNotInDatabase)` - Subject refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - Role not admitted
    pub async fn require(&self, roles: &[RoleName]) -> Result<UserProfile, AppError> {
        let token = self.bearer_token()?;

        let claims = self
            .tokens
            .verify(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let user_id = claims.sub.parse::<i32>().map_err(|_| {
            AuthError::InvalidToken(format!("subject '{}' is not a user id", claims.sub))
        })?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !roles.is_empty() && !roles.iter().any(|role| role.as_str() == user.role_name) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!(
                    "role '{}' not in [{}]",
                    user.role_name,
                    roles.iter().map(RoleName::as_str).collect::<Vec<_>>().join(", ")
                ),
            )
            .into());
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let headers: &'a HeaderMap = self.headers;

        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let (scheme, token) = value.split_once(' ').ok_or(AuthError::MissingToken)?;

        if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
            return Err(AuthError::MissingToken);
        }

        Ok(token.trim())
    }
}
