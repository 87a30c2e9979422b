use super::*;

/// Tests updating only the username.
///
/// Verifies that columns passed as `None` keep their stored values.
///
/// Expected: Ok with username changed and hash and role preserved
#[tokio::test]
async fn updates_only_present_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::UserFactory::new(db)
        .password_hash("original")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    repo.update(user.id, Some("renamed".to_string()), None, None)
        .await?;

    let stored = repo.find_by_username("renamed").await?.unwrap();
    assert_eq!(stored.password_hash, "original");
    assert_eq!(stored.role_id, user.role_id);

    Ok(())
}

/// Tests that an update with nothing to change is a no-op, even for a missing id.
///
/// Expected: Ok(())
#[tokio::test]
async fn empty_update_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).update(999, None, None, None).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn missing_user_is_not_updated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, Some("ghost".to_string()), None, None)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
