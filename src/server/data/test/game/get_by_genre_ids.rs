use super::*;

/// Tests that only games carrying a requested genre are returned.
///
/// Expected: Ok with the matching game only
#[tokio::test]
async fn filters_by_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rpg = factory::genre::create_genre(db).await?;
    let puzzle = factory::genre::create_genre(db).await?;
    let matching = factory::game::create_game(db).await?;
    let other = factory::game::create_game(db).await?;
    factory::genre::link_game(db, matching.id, rpg.id).await?;
    factory::genre::link_game(db, other.id, puzzle.id).await?;

    let games = GameRepository::new(db)
        .get_by_genre_ids(&[rpg.id], page(20, 0))
        .await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, matching.id);

    Ok(())
}

/// Tests that a game matching several requested genres appears once.
///
/// Expected: Ok with one entry for the game
#[tokio::test]
async fn deduplicates_multi_genre_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rpg = factory::genre::create_genre(db).await?;
    let action = factory::genre::create_genre(db).await?;
    let game = factory::game::create_game(db).await?;
    factory::genre::link_game(db, game.id, rpg.id).await?;
    factory::genre::link_game(db, game.id, action.id).await?;

    let games = GameRepository::new(db)
        .get_by_genre_ids(&[rpg.id, action.id], page(20, 0))
        .await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].genres.len(), 2);

    Ok(())
}

/// Tests rating order with id as tie-breaker, and paging over it.
///
/// Expected: Ok with games ordered high to low, equal ratings by ascending id
#[tokio::test]
async fn orders_by_rating_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let genre = factory::genre::create_genre(db).await?;
    let low = factory::game::create_game_with_rating(db, 1.0).await?;
    let tie_a = factory::game::create_game_with_rating(db, 3.0).await?;
    let high = factory::game::create_game_with_rating(db, 4.9).await?;
    let tie_b = factory::game::create_game_with_rating(db, 3.0).await?;
    for game in [&low, &tie_a, &high, &tie_b] {
        factory::genre::link_game(db, game.id, genre.id).await?;
    }
    let repo = GameRepository::new(db);

    let all: Vec<i32> = repo
        .get_by_genre_ids(&[genre.id], page(20, 0))
        .await?
        .iter()
        .map(|g| g.id)
        .collect();
    let second_page: Vec<i32> = repo
        .get_by_genre_ids(&[genre.id], page(2, 2))
        .await?
        .iter()
        .map(|g| g.id)
        .collect();

    assert_eq!(all, vec![high.id, tie_a.id, tie_b.id, low.id]);
    assert_eq!(second_page, vec![tie_b.id, low.id]);

    Ok(())
}

/// Tests that an empty genre list matches nothing.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_genre_list_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::create_game_with_relations(db).await?;

    let games = GameRepository::new(db)
        .get_by_genre_ids(&[], page(20, 0))
        .await?;

    assert!(games.is_empty());

    Ok(())
}
