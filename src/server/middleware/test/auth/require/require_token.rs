use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(ANY_ROLE).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header using a scheme other than Bearer.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic dXNlcjpwYXNz"),
    );

    let result = AuthGuard::new(db, &tokens, &headers).require(ANY_ROLE).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an expired token for an existing user.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user(db).await?;
    let tokens = tokens();
    let token = tokens.issue_with_ttl(&user.id.to_string(), Duration::hours(-2))?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require(ANY_ROLE).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a validly signed token whose subject is not a number.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_non_numeric_subject() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let token = tokens.issue("alice")?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require(ANY_ROLE).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the subject id
#[tokio::test]
async fn rejects_unknown_subject() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let token = tokens.issue("999")?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require(ANY_ROLE).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}
