use super::*;
use test_utils::factory;

/// Tests joining and leaving a team.
///
/// Expected: team_id set after join, cleared after leave
#[tokio::test]
async fn sets_and_clears_team_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Semester)
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let semester = factory::create_semester(db).await?;
    let team = factory::create_team(db, semester.id).await?;
    let user = factory::create_user(db).await?;

    repo.set_team(user.id, Some(team.id)).await?;
    let joined = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(joined.team_id, Some(team.id));

    repo.set_team(user.id, None).await?;
    let left = repo.find_by_id(user.id).await?.unwrap();
    assert!(left.team_id.is_none());

    Ok(())
}

/// Tests listing the members of a team.
///
/// Expected: only members of the requested team, ordered by name
#[tokio::test]
async fn finds_members_by_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Semester)
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let semester = factory::create_semester(db).await?;
    let team = factory::create_team(db, semester.id).await?;
    let other_team = factory::create_team(db, semester.id).await?;

    factory::create_user_in_team(db, team.id).await?;
    factory::create_user_in_team(db, team.id).await?;
    factory::create_user_in_team(db, other_team.id).await?;

    let members = repo.find_by_team(team.id).await?;

    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|m| m.team_id == Some(team.id)));

    Ok(())
}
