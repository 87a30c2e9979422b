use super::*;

/// Tests reading liked genre ids.
///
/// Expected: ids in ascending order
#[tokio::test]
async fn returns_ids_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user(db).await?;
    let first = factory::genre::create_genre(db).await?;
    let second = factory::genre::create_genre(db).await?;
    factory::genre::like(db, user.id, second.id).await?;
    factory::genre::like(db, user.id, first.id).await?;

    let ids = UserRepository::new(db).liked_genre_ids(user.id).await?;

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests a user without liked genres.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_without_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user(db).await?;

    let ids = UserRepository::new(db).liked_genre_ids(user.id).await?;

    assert!(ids.is_empty());

    Ok(())
}
