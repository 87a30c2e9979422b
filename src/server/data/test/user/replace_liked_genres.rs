use super::*;

/// Tests replacing the liked genre set.
///
/// Expected: Ok with only the new ids stored
#[tokio::test]
async fn replaces_existing_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user(db).await?;
    let old = factory::genre::create_genre(db).await?;
    let kept = factory::genre::create_genre(db).await?;
    let new = factory::genre::create_genre(db).await?;
    factory::genre::like(db, user.id, old.id).await?;
    factory::genre::like(db, user.id, kept.id).await?;
    let repo = UserRepository::new(db);

    repo.replace_liked_genres(user.id, &[kept.id, new.id]).await?;

    assert_eq!(repo.liked_genre_ids(user.id).await?, vec![kept.id, new.id]);

    Ok(())
}

/// Tests clearing the liked genre set with an empty list.
///
/// Expected: Ok with no liked genres left
#[tokio::test]
async fn empty_list_clears_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user(db).await?;
    let genre = factory::genre::create_genre(db).await?;
    factory::genre::like(db, user.id, genre.id).await?;
    let repo = UserRepository::new(db);

    repo.replace_liked_genres(user.id, &[]).await?;

    assert!(repo.liked_genre_ids(user.id).await?.is_empty());

    Ok(())
}

/// Tests that other users' likes are untouched.
///
/// Expected: Ok with the other user's set unchanged
#[tokio::test]
async fn leaves_other_users_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let genre = factory::genre::create_genre(db).await?;
    factory::genre::like(db, other.id, genre.id).await?;
    let repo = UserRepository::new(db);

    repo.replace_liked_genres(user.id, &[]).await?;

    assert_eq!(repo.liked_genre_ids(other.id).await?, vec![genre.id]);

    Ok(())
}
