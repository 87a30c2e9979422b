//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository borrows any `ConnectionTrait` implementor, so the same methods run
//! against the connection pool or inside a transaction.

pub mod game;
pub mod genre;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;
