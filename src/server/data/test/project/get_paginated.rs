use super::*;
use crate::server::data::tag::TagRepository;

/// Tests filtering the listing by semester.
///
/// Expected: only projects registered in the requested semester
#[tokio::test]
async fn filters_by_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    let spring = factory::create_semester(db).await?;
    let fall = factory::create_semester(db).await?;

    let spring_team = factory::create_team(db, spring.id).await?;
    let fall_team = factory::create_team(db, fall.id).await?;

    let spring_project = factory::create_project(db, spring_team.id, spring.id).await?;
    factory::create_project(db, fall_team.id, fall.id).await?;

    let filter = ProjectFilter {
        semester_id: Some(spring.id),
        ..Default::default()
    };
    let (projects, total) = repo.get_paginated(&filter, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(projects[0].id, spring_project.id);

    Ok(())
}

/// Tests the free-text search over name and summary.
///
/// Expected: matches in either column, misses return an empty page
#[tokio::test]
async fn searches_name_and_summary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    let semester = factory::create_semester(db).await?;
    let team_a = factory::create_team(db, semester.id).await?;
    let team_b = factory::create_team(db, semester.id).await?;

    factory::project::ProjectFactory::new(db, team_a.id, semester.id)
        .name("Solar Tracker")
        .summary("Panels that follow the sun")
        .build()
        .await?;
    factory::project::ProjectFactory::new(db, team_b.id, semester.id)
        .name("Inventory App")
        .summary("Warehouse management with solar-powered scanners")
        .build()
        .await?;

    let filter = ProjectFilter {
        search: Some("solar".to_string()),
        ..Default::default()
    };
    let (projects, total) = repo.get_paginated(&filter, 0, 10).await?;
    assert_eq!(total, 2);
    assert_eq!(projects.len(), 2);

    let filter = ProjectFilter {
        search: Some("warehouse".to_string()),
        ..Default::default()
    };
    let (_, total) = repo.get_paginated(&filter, 0, 10).await?;
    assert_eq!(total, 1);

    let filter = ProjectFilter {
        search: Some("nonexistent".to_string()),
        ..Default::default()
    };
    let (projects, total) = repo.get_paginated(&filter, 0, 10).await?;
    assert_eq!(total, 0);
    assert!(projects.is_empty());

    Ok(())
}

/// Tests filtering the listing by bound tag.
///
/// Expected: only projects bound to the tag; an unknown tag name yields an
/// empty page rather than an error
#[tokio::test]
async fn filters_by_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let tag_repo = TagRepository::new(db);

    let semester = factory::create_semester(db).await?;
    let team_a = factory::create_team(db, semester.id).await?;
    let team_b = factory::create_team(db, semester.id).await?;

    let tagged = factory::create_project(db, team_a.id, semester.id).await?;
    factory::create_project(db, team_b.id, semester.id).await?;

    let tag = factory::create_tag(db).await?;
    tag_repo.create_binding(tagged.id, tag.id).await?;

    let filter = ProjectFilter {
        tag: Some(tag.name.clone()),
        ..Default::default()
    };
    let (projects, total) = repo.get_paginated(&filter, 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(projects[0].id, tagged.id);

    let filter = ProjectFilter {
        tag: Some("no-such-tag".to_string()),
        ..Default::default()
    };
    let (projects, total) = repo.get_paginated(&filter, 0, 10).await?;
    assert_eq!(total, 0);
    assert!(projects.is_empty());

    Ok(())
}

/// Tests pagination counts over an unfiltered listing.
///
/// Expected: correct total and page sizes
#[tokio::test]
async fn paginates_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    let semester = factory::create_semester(db).await?;
    for _ in 0..3 {
        let team = factory::create_team(db, semester.id).await?;
        factory::create_project(db, team.id, semester.id).await?;
    }

    let (first_page, total) = repo
        .get_paginated(&ProjectFilter::default(), 0, 2)
        .await?;
    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);

    let (second_page, _) = repo
        .get_paginated(&ProjectFilter::default(), 1, 2)
        .await?;
    assert_eq!(second_page.len(), 1);

    Ok(())
}
