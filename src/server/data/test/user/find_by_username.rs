use super::*;

/// Tests finding a user by exact username.
///
/// Expected: Ok(Some(User)) including the stored password hash
#[tokio::test]
async fn finds_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::UserFactory::new(db)
        .username("editor1")
        .password_hash("stored-hash")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_username("editor1")
        .await?
        .unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(found.password_hash, "stored-hash");
    assert_eq!(found.role_id, factory::role::EDITOR_ROLE_ID);

    Ok(())
}

/// Tests that lookups do not match on prefixes.
///
/// Expected: Ok(None)
#[tokio::test]
async fn requires_exact_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    factory::user::UserFactory::new(db)
        .username("editor1")
        .build()
        .await?;

    let found = UserRepository::new(db).find_by_username("editor").await?;

    assert!(found.is_none());

    Ok(())
}
