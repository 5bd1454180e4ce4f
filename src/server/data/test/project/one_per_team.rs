use super::*;

/// Tests team-project existence checks.
///
/// Expected: false before registration, true after
#[tokio::test]
async fn reports_existing_project_for_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    let semester = factory::create_semester(db).await?;
    let team = factory::create_team(db, semester.id).await?;

    assert!(!repo.exists_for_team(team.id).await?);

    factory::create_project(db, team.id, semester.id).await?;

    assert!(repo.exists_for_team(team.id).await?);

    Ok(())
}

/// Tests the unique index backing the one-project-per-team rule.
///
/// The service checks before inserting, but the index is the backstop; a
/// second insert for the same team must fail at the database level.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn second_project_for_team_violates_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let team = factory::create_team(db, semester.id).await?;

    factory::create_project(db, team.id, semester.id).await?;
    let second = factory::create_project(db, team.id, semester.id).await;

    assert!(second.is_err());

    Ok(())
}
