use super::*;

/// Tests the guard with no user in the session.
///
/// Expected: Err(UserNotInSession), which maps to 401
#[tokio::test]
async fn rejects_unauthenticated_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_project_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests the guard with a session referencing a deleted account.
///
/// Expected: Err(UserNotInDatabase), which maps to 401
#[tokio::test]
async fn rejects_stale_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_project_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    AuthSession::new(session).set_user_id(9999).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}

/// Tests that a logged-in visitor passes an empty permission list.
///
/// Expected: Ok with the resolved domain user
#[tokio::test]
async fn allows_any_logged_in_user_without_permissions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_project_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let resolved = AuthGuard::new(db, session).require(&[]).await.unwrap();

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests tier ordering: students are rejected from staff routes.
///
/// Expected: Err(AccessDenied), which maps to 403
#[tokio::test]
async fn rejects_student_from_staff_route() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_project_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let user = factory::user::UserFactory::new(db)
        .role("capstone_student")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests tier ordering: admins pass staff checks.
///
/// Expected: Ok
#[tokio::test]
async fn admin_passes_staff_check() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_project_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let user = factory::user::UserFactory::new(db)
        .role("admin")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests tier ordering: staff are rejected from admin routes.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_staff_from_admin_route() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_project_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let user = factory::user::UserFactory::new(db)
        .role("staff")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests project edit access for a member of the owning team.
///
/// Expected: Ok
#[tokio::test]
async fn team_member_can_edit_own_project() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_project_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let (semester, team, _) = factory::helpers::create_student_with_team(db).await?;
    let member = factory::create_user_in_team(db, team.id).await?;
    let project = factory::create_project(db, team.id, semester.id).await?;

    AuthSession::new(session)
        .set_user_id(member.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ProjectEditor(project.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests project edit access for a student on a different team.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn outsider_cannot_edit_project() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_project_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let (semester, team, _) = factory::helpers::create_student_with_team(db).await?;
    let project = factory::create_project(db, team.id, semester.id).await?;

    let other_team = factory::create_team(db, semester.id).await?;
    let outsider = factory::create_user_in_team(db, other_team.id).await?;

    AuthSession::new(session)
        .set_user_id(outsider.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ProjectEditor(project.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that staff can edit any project regardless of team membership.
///
/// Expected: Ok
#[tokio::test]
async fn staff_can_edit_any_project() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_project_tables().build().await?;
    let (db, session) = test.db_and_session().await?;

    let (semester, team, _) = factory::helpers::create_student_with_team(db).await?;
    let project = factory::create_project(db, team.id, semester.id).await?;

    let staff = factory::user::UserFactory::new(db)
        .role("staff")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(staff.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ProjectEditor(project.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}
