//! Request and response DTOs shared by the HTTP layer and its OpenAPI document.

pub mod api;
pub mod auth;
pub mod game;
pub mod user;
