use super::*;

/// Tests that an empty role set admits every role.
///
/// Expected: Ok(UserProfile) for a plain user
#[tokio::test]
async fn empty_role_set_admits_any_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user_with_role(db, factory::role::USER_ROLE_ID).await?;
    let tokens = tokens();
    let headers = bearer(&tokens.issue(&user.id.to_string())?);

    let profile = AuthGuard::new(db, &tokens, &headers)
        .require(ANY_ROLE)
        .await?;

    assert_eq!(profile.id, user.id);
    assert_eq!(profile.role_name, "user");

    Ok(())
}

/// Tests editor access for an editor.
///
/// Expected: Ok(UserProfile)
#[tokio::test]
async fn editor_passes_editor_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user_with_role(db, factory::role::EDITOR_ROLE_ID).await?;
    let tokens = tokens();
    let headers = bearer(&tokens.issue(&user.id.to_string())?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(EDITOR_ACCESS)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests editor access for a plain user.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user's id
#[tokio::test]
async fn user_role_denied_editor_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let user = factory::user::create_user_with_role(db, factory::role::USER_ROLE_ID).await?;
    let tokens = tokens();
    let headers = bearer(&tokens.issue(&user.id.to_string())?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(EDITOR_ACCESS)
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("user"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests admin access for an editor and for an admin.
///
/// Expected: editor denied, admin admitted
#[tokio::test]
async fn admin_access_admits_only_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::create_default_roles(db).await?;
    let editor = factory::user::create_user_with_role(db, factory::role::EDITOR_ROLE_ID).await?;
    let admin = factory::user::create_user_with_role(db, factory::role::ADMIN_ROLE_ID).await?;
    let tokens = tokens();
    let editor_headers = bearer(&tokens.issue(&editor.id.to_string())?);
    let admin_headers = bearer(&tokens.issue(&admin.id.to_string())?);

    let editor_result = AuthGuard::new(db, &tokens, &editor_headers)
        .require(ADMIN_ACCESS)
        .await;
    let admin_result = AuthGuard::new(db, &tokens, &admin_headers)
        .require(ADMIN_ACCESS)
        .await;

    assert!(matches!(
        editor_result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(admin_result?.role_name, "admin");

    Ok(())
}
