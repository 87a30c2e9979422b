use super::*;

/// Tests that an empty id list is vacuously satisfied.
///
/// Expected: Ok(true) without any genres in the database
#[tokio::test]
async fn empty_list_is_true() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Genre)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(GenreRepository::new(db).all_exist(&[]).await?);

    Ok(())
}

/// Tests that duplicate ids of existing genres pass.
///
/// Expected: Ok(true)
#[tokio::test]
async fn duplicates_of_existing_ids_are_true() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Genre)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rpg = factory::genre::create_genre(db).await?;
    let action = factory::genre::create_genre(db).await?;

    let result = GenreRepository::new(db)
        .all_exist(&[rpg.id, action.id, rpg.id])
        .await?;

    assert!(result);

    Ok(())
}

/// Tests that a single missing id fails the whole check.
///
/// Expected: Ok(false)
#[tokio::test]
async fn one_missing_id_is_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Genre)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let genre = factory::genre::create_genre(db).await?;

    let result = GenreRepository::new(db).all_exist(&[genre.id, 9999]).await?;

    assert!(!result);

    Ok(())
}
