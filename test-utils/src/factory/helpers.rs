//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game carrying one genre, one team and one review.
///
/// The genre, team and review are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((game, genre, team, review))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_relations(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::game::Model,
        entity::genre::Model,
        entity::team::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let game = crate::factory::game::create_game(db).await?;
    let genre = crate::factory::genre::create_genre(db).await?;
    let team = crate::factory::team::create_team(db).await?;

    crate::factory::genre::link_game(db, game.id, genre.id).await?;
    crate::factory::team::link_game(db, game.id, team.id).await?;
    let review = crate::factory::review::create_review(db, game.id).await?;

    Ok((game, genre, team, review))
}
