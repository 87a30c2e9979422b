use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::{credential::CredentialService, token::TokenService},
};

/// Service exchanging username and password for a bearer token.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    credentials: &'a CredentialService,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        credentials: &'a CredentialService,
    ) -> Self {
        Self {
            db,
            tokens,
            credentials,
        }
    }

    /// Verifies credentials and issues a token whose subject is the user id.
    ///
    /// # Arguments
    /// - `username` - Username as submitted
    /// - `password` - Plain-text password as submitted
    ///
    /// # Returns
    /// - `Ok(String)` - Signed access token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(AppError)` - Database or signing error
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.credentials.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!("Issuing token for user {}", user.id);

        Ok(self.tokens.issue(&user.id.to_string())?)
    }
}
