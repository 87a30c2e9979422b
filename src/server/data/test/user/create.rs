use super::*;

/// Tests creating a user.
///
/// Expected: Ok(User) with the given fields and a generated id
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;

    let user = UserRepository::new(db)
        .create(
            "new_user".to_string(),
            "hash".to_string(),
            factory::role::USER_ROLE_ID,
        )
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "new_user");
    assert_eq!(user.role_id, factory::role::USER_ROLE_ID);

    Ok(())
}

/// Tests that the unique constraint rejects a duplicate username.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let repo = UserRepository::new(db);
    repo.create("dup".to_string(), "hash".to_string(), 3).await?;

    let result = repo.create("dup".to_string(), "hash".to_string(), 3).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that the foreign key rejects an unknown role.
///
/// Expected: Err
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;

    let result = UserRepository::new(db)
        .create("orphan".to_string(), "hash".to_string(), 42)
        .await;

    assert!(result.is_err());

    Ok(())
}
