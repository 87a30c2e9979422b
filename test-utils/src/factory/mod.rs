//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! factory::role::create_default_roles(db).await?;
//! let user = factory::user::create_user(db).await?;
//! let genre = factory::genre::create_genre(db).await?;
//! let game = factory::game::GameFactory::new(db).rating(4.5).build().await?;
//! factory::genre::link_game(db, game.id, genre.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `role` - Seed the fixed roles or create custom ones
//! - `user` - Create users with a role and password hash
//! - `genre` - Create genres and link them to games or users
//! - `team` - Create teams and link them to games
//! - `game` - Create games
//! - `review` - Create reviews for a game
//! - `helpers` - Unique id generation and multi-entity setups

pub mod game;
pub mod genre;
pub mod helpers;
pub mod review;
pub mod role;
pub mod team;
pub mod user;

pub use game::create_game;
pub use genre::create_genre;
pub use review::create_review;
pub use role::create_default_roles;
pub use team::create_team;
pub use user::create_user;
