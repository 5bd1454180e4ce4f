use super::*;
use test_utils::factory;

/// Tests promoting a user to staff.
///
/// Expected: Ok with the stored role string updated
#[tokio::test]
async fn promotes_user_to_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = factory::create_user(db).await?;

    repo.set_role(user.id, Role::Staff).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.role, "staff");

    Ok(())
}

/// Tests demoting an admin back to visitor.
///
/// Expected: Ok with the stored role string updated
#[tokio::test]
async fn demotes_admin_to_visitor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = test_utils::factory::user::UserFactory::new(db)
        .role("admin")
        .build()
        .await?;

    repo.set_role(user.id, Role::Visitor).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.role, "visitor");

    Ok(())
}

/// Tests setting a role for a non-existent user.
///
/// Expected: Ok (no-op, no error)
#[tokio::test]
async fn succeeds_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_role(9999, Role::Admin).await;

    assert!(result.is_ok());

    Ok(())
}
