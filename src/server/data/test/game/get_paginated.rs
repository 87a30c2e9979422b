use super::*;

/// Tests that pages follow insertion order and respect limit and offset.
///
/// Expected: Ok with the second and third of five games
#[tokio::test]
async fn returns_window_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::game::create_game(db).await?.id);
    }

    let games = GameRepository::new(db).get_paginated(page(2, 1)).await?;

    let returned: Vec<i32> = games.iter().map(|g| g.id).collect();
    assert_eq!(returned, ids[1..3].to_vec());

    Ok(())
}

/// Tests that an offset past the end yields an empty page.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn offset_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::create_game(db).await?;

    let games = GameRepository::new(db).get_paginated(page(10, 5)).await?;

    assert!(games.is_empty());

    Ok(())
}

/// Tests that associations are loaded per game and sorted.
///
/// Verifies genre and team names are sorted by name, reviews follow creation order,
/// and a game without associations gets empty lists.
///
/// Expected: Ok with associations attached to the right games
#[tokio::test]
async fn loads_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let game = factory::game::GameFactory::new(db)
        .title("Loaded")
        .rating(4.2)
        .summary("Has everything")
        .build()
        .await?;
    let bare = factory::game::create_game(db).await?;
    let shooter = factory::genre::create_genre_named(db, "Shooter").await?;
    let action = factory::genre::create_genre_named(db, "Action").await?;
    let studio = factory::team::create_team_named(db, "Studio").await?;
    factory::genre::link_game(db, game.id, shooter.id).await?;
    factory::genre::link_game(db, game.id, action.id).await?;
    factory::team::link_game(db, game.id, studio.id).await?;
    factory::review::create_review_with_body(db, game.id, "first").await?;
    factory::review::create_review_with_body(db, game.id, "second").await?;

    let games = GameRepository::new(db).get_paginated(page(10, 0)).await?;

    assert_eq!(games.len(), 2);
    let loaded = &games[0];
    assert_eq!(loaded.title, "Loaded");
    assert_eq!(loaded.rating, 4.2);
    assert_eq!(loaded.summary.as_deref(), Some("Has everything"));
    assert_eq!(loaded.genres, vec!["Action".to_string(), "Shooter".to_string()]);
    assert_eq!(loaded.teams, vec!["Studio".to_string()]);
    assert_eq!(loaded.reviews, vec!["first".to_string(), "second".to_string()]);
    assert_eq!(games[1].id, bare.id);
    assert!(games[1].genres.is_empty());
    assert!(games[1].teams.is_empty());
    assert!(games[1].reviews.is_empty());

    Ok(())
}
