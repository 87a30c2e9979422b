//! Handler state, built once in `main` and cloned into every request by axum.

use sea_orm::DatabaseConnection;

use crate::server::service::{credential::CredentialService, token::TokenService};

/// Connection pool plus the token and password services.
///
/// Clones are cheap: the pool is reference counted, `TokenService` only holds its
/// keys and `CredentialService` carries no state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Issues tokens on login, verifies them in `AuthGuard`.
    pub tokens: TokenService,

    /// Hashes passwords on create and update, verifies them on login.
    pub credentials: CredentialService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, credentials: CredentialService) -> Self {
        Self {
            db,
            tokens,
            credentials,
        }
    }
}
