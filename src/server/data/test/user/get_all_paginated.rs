use super::*;
use test_utils::factory;

/// Tests paginating the user base.
///
/// Creates five users and fetches pages of two. Verifies totals and page
/// sizes.
///
/// Expected: total 5, first page holds 2, last page holds 1
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let (first_page, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);

    let (last_page, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}

/// Tests that users come back ordered alphabetically by name.
///
/// Expected: names sorted ascending regardless of insertion order
#[tokio::test]
async fn orders_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    test_utils::factory::user::UserFactory::new(db)
        .name("Charlie")
        .build()
        .await?;
    test_utils::factory::user::UserFactory::new(db)
        .name("Alice")
        .build()
        .await?;
    test_utils::factory::user::UserFactory::new(db)
        .name("Bob")
        .build()
        .await?;

    let (users, _) = repo.get_all_paginated(0, 10).await?;
    let names: Vec<_> = users.into_iter().map(|u| u.name).collect();

    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}
