//! HTTP request handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs to parameters, call a service,
//! and convert the resulting domain models back to DTOs.

pub mod auth;
pub mod game;
pub mod user;
