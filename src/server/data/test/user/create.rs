use super::*;

/// Tests creating an account and finding it by email.
///
/// Verifies that the repository stores the lowercased email and role string
/// as given, and that the email lookup returns the stored row.
///
/// Expected: Ok with the created user retrievable by email
#[tokio::test]
async fn creates_and_finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let created = repo
        .create(CreateUserParams {
            email: "ada@example.edu".to_string(),
            password_hash: "hash".to_string(),
            name: "Ada".to_string(),
            role: Role::CapstoneStudent,
        })
        .await?;

    assert_eq!(created.email, "ada@example.edu");
    assert_eq!(created.role, "capstone_student");
    assert!(created.team_id.is_none());

    let found = repo.find_by_email("ada@example.edu").await?.unwrap();
    assert_eq!(found.id, created.id);

    Ok(())
}

/// Tests that email lookup misses for unknown addresses.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_email_misses_for_unknown_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.edu").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that duplicate emails violate the unique constraint.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(CreateUserParams {
        email: "ada@example.edu".to_string(),
        password_hash: "hash".to_string(),
        name: "Ada".to_string(),
        role: Role::Visitor,
    })
    .await?;

    let duplicate = repo
        .create(CreateUserParams {
            email: "ada@example.edu".to_string(),
            password_hash: "hash".to_string(),
            name: "Imposter".to_string(),
            role: Role::Visitor,
        })
        .await;

    assert!(duplicate.is_err());

    Ok(())
}
