use super::*;

/// Tests username existence checks.
///
/// Expected: true for a stored username, false otherwise
#[tokio::test]
async fn reports_taken_usernames() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists("taken").await?);
    assert!(!repo.exists("free").await?);

    Ok(())
}
