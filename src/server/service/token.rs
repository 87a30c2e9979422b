//! Signed bearer token issuing and verification.
//!
//! Tokens are JWTs signed with a shared HMAC secret. The `sub` claim carries the user id
//! as a decimal string and `exp` bounds the token lifetime.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::config::Config;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issues and verifies bearer tokens.
///
/// Holds the signing keys built once at startup; clones share nothing mutable.
#[derive(Clone)]
pub struct TokenService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    /// - `algorithm` - HMAC algorithm used for signing and accepted on verification
    /// - `expire_minutes` - Lifetime of issued tokens
    ///
    /// # Returns
    /// - `TokenService` - New service instance
    pub fn new(secret: &str, algorithm: Algorithm, expire_minutes: i64) -> Self {
        Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(expire_minutes),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret_key,
            config.jwt_algorithm,
            config.jwt_expire_minutes,
        )
    }

    /// Issues a token for `subject` with the configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Issues a token for `subject` that expires `ttl` from now.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(JwtError)` - Signing failed
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
    }

    /// Verifies signature and expiry and returns the claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(JwtError)` - Bad signature, wrong algorithm, malformed or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(data.claims)
    }
}
