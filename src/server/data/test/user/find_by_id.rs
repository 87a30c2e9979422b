use super::*;

/// Tests loading a user with role and liked genres.
///
/// Verifies that the profile carries the role name and the liked genre names
/// sorted alphabetically regardless of insertion order.
///
/// Expected: Ok(Some(UserProfile)) with resolved associations
#[tokio::test]
async fn loads_role_and_liked_genres() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::UserFactory::new(db)
        .username("reader")
        .role_id(factory::role::USER_ROLE_ID)
        .build()
        .await?;
    let strategy = factory::genre::create_genre_named(db, "Strategy").await?;
    let action = factory::genre::create_genre_named(db, "Action").await?;
    factory::genre::like(db, user.id, strategy.id).await?;
    factory::genre::like(db, user.id, action.id).await?;

    let profile = UserRepository::new(db).find_by_id(user.id).await?.unwrap();

    assert_eq!(profile.username, "reader");
    assert_eq!(profile.role_name, "user");
    assert_eq!(
        profile.liked_genre_names,
        vec!["Action".to_string(), "Strategy".to_string()]
    );

    Ok(())
}

/// Tests that another user's likes do not leak into the profile.
///
/// Expected: Ok(Some(UserProfile)) with an empty liked genre list
#[tokio::test]
async fn ignores_other_users_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let genre = factory::genre::create_genre(db).await?;
    factory::genre::like(db, other.id, genre.id).await?;

    let profile = UserRepository::new(db).find_by_id(user.id).await?.unwrap();

    assert!(profile.liked_genre_names.is_empty());

    Ok(())
}

/// Tests looking up an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
