use super::*;

/// Tests updating a project's editable fields.
///
/// Expected: fields replaced and updated_at bumped past created_at
#[tokio::test]
async fn updates_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;

    let updated = repo
        .update(UpdateProjectParams {
            id: project.id,
            category_id: None,
            name: "Renamed".to_string(),
            summary: "New summary".to_string(),
            description: Some("Long form".to_string()),
            repo_url: Some("https://example.com/repo".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.summary, "New summary");
    assert_eq!(updated.description.as_deref(), Some("Long form"));
    assert!(updated.updated_at >= project.updated_at);

    Ok(())
}

/// Tests updating a project that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    let updated = repo
        .update(UpdateProjectParams {
            id: 9999,
            category_id: None,
            name: "Ghost".to_string(),
            summary: "Ghost".to_string(),
            description: None,
            repo_url: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
