use super::*;
use test_utils::factory;

/// Tests admin detection with no users at all.
///
/// Expected: false
#[tokio::test]
async fn false_for_empty_database() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests admin detection with only lower-tier accounts.
///
/// Expected: false when visitors and staff exist but no admin
#[tokio::test]
async fn false_without_admin_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    factory::create_user(db).await?;
    test_utils::factory::user::UserFactory::new(db)
        .role("staff")
        .build()
        .await?;

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests admin detection once an admin account exists.
///
/// Expected: true
#[tokio::test]
async fn true_with_admin_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    test_utils::factory::user::UserFactory::new(db)
        .role("admin")
        .build()
        .await?;

    assert!(repo.admin_exists().await?);

    Ok(())
}
