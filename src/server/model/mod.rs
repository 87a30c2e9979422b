//! Domain models and operation parameters.
//!
//! Domain models are built from entities at the repository boundary and converted to
//! DTOs in the controller layer. Parameter types carry validated request data from
//! controllers into services.

pub mod game;
pub mod user;
