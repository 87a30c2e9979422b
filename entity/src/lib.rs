//! SeaORM entity definitions for the game catalog schema.
//!
//! Each module maps one table. Link tables (`game_genre`, `game_team`,
//! `user_liked_genre`) use the pair of foreign keys as a composite primary key so
//! a pair can only be stored once.

pub mod prelude;

pub mod game;
pub mod game_genre;
pub mod game_team;
pub mod genre;
pub mod review;
pub mod role;
pub mod team;
pub mod user;
pub mod user_liked_genre;
