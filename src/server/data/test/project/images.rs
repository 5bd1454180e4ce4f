use super::*;

/// Tests that gallery images append with increasing positions.
///
/// Expected: positions 0, 1, 2 in insertion order
#[tokio::test]
async fn appends_images_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;

    repo.add_image(project.id, "projects/a.png".to_string()).await?;
    repo.add_image(project.id, "projects/b.png".to_string()).await?;
    repo.add_image(project.id, "projects/c.png".to_string()).await?;

    let images = repo.images_for_project(project.id).await?;

    assert_eq!(images.len(), 3);
    assert_eq!(
        images.iter().map(|i| i.position).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    Ok(())
}

/// Tests setting and clearing the thumbnail path.
///
/// Expected: path stored, then nulled
#[tokio::test]
async fn sets_and_clears_thumbnail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;

    repo.set_thumbnail(project.id, Some("projects/a.png")).await?;
    let with_thumb = repo.find_by_id(project.id).await?.unwrap();
    assert_eq!(with_thumb.thumbnail_path.as_deref(), Some("projects/a.png"));

    repo.set_thumbnail(project.id, None).await?;
    let without_thumb = repo.find_by_id(project.id).await?.unwrap();
    assert!(without_thumb.thumbnail_path.is_none());

    Ok(())
}

/// Tests deleting a gallery image.
///
/// Expected: the remaining images survive, the deleted one is gone
#[tokio::test]
async fn deletes_single_image() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;

    let first = repo.add_image(project.id, "projects/a.png".to_string()).await?;
    repo.add_image(project.id, "projects/b.png".to_string()).await?;

    repo.delete_image(first.id).await?;

    let images = repo.images_for_project(project.id).await?;
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].path, "projects/b.png");

    Ok(())
}
