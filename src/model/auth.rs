use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form-encoded login credentials.
#[derive(Deserialize, Clone, Debug, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AccessTokenDto {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}
