use super::*;
use entity::prelude::{RegisteredStudent, Semester};

/// Tests email lookup across semesters.
///
/// Expected: hit for a registered email, miss otherwise
#[tokio::test]
async fn finds_entry_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Semester)
        .with_table(RegisteredStudent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RosterRepository::new(db);

    let semester = factory::create_semester(db).await?;
    factory::registered_student::create_registered_student_with_email(
        db,
        semester.id,
        "ada@example.edu",
    )
    .await?;

    assert!(repo.find_by_email("ada@example.edu").await?.is_some());
    assert!(repo.find_by_email("nobody@example.edu").await?.is_none());

    Ok(())
}

/// Tests moving an entry to a different semester while refreshing the name.
///
/// Expected: semester_id and name replaced, email untouched
#[tokio::test]
async fn update_entry_moves_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Semester)
        .with_table(RegisteredStudent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RosterRepository::new(db);

    let spring = factory::create_semester(db).await?;
    let fall = factory::create_semester(db).await?;

    let entry = factory::registered_student::create_registered_student_with_email(
        db,
        spring.id,
        "ada@example.edu",
    )
    .await?;

    let moved = repo
        .update_entry(entry.id, fall.id, "Ada L.".to_string())
        .await?
        .unwrap();

    assert_eq!(moved.semester_id, fall.id);
    assert_eq!(moved.name, "Ada L.");
    assert_eq!(moved.email, "ada@example.edu");

    Ok(())
}

/// Tests paginating a semester's roster.
///
/// Expected: only entries for the requested semester, correct totals
#[tokio::test]
async fn paginates_by_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Semester)
        .with_table(RegisteredStudent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RosterRepository::new(db);

    let spring = factory::create_semester(db).await?;
    let fall = factory::create_semester(db).await?;

    for _ in 0..3 {
        factory::create_registered_student(db, spring.id).await?;
    }
    factory::create_registered_student(db, fall.id).await?;

    let (entries, total) = repo.get_by_semester_paginated(spring.id, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(entries.len(), 2);

    Ok(())
}
