use super::*;

mod require_role;
mod require_token;
