use super::*;
use entity::prelude::Comment;

/// Tests paginated comment retrieval with the author join.
///
/// Expected: comments for the project only, each paired with its author row
#[tokio::test]
async fn returns_comments_with_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    let (semester, _, project) = factory::helpers::create_project_with_dependencies(db).await?;
    let other_team = factory::create_team(db, semester.id).await?;
    let other_project = factory::create_project(db, other_team.id, semester.id).await?;

    let author = factory::create_user(db).await?;
    factory::create_comment(db, project.id, author.id).await?;
    factory::create_comment(db, project.id, author.id).await?;
    factory::create_comment(db, other_project.id, author.id).await?;

    let (rows, total) = repo.get_by_project_paginated(project.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(rows.len(), 2);
    for (comment, joined_author) in &rows {
        assert_eq!(comment.project_id, project.id);
        assert_eq!(joined_author.as_ref().map(|a| a.id), Some(author.id));
    }

    Ok(())
}

/// Tests counting comments by author.
///
/// Expected: count across projects for the author, zero for others
#[tokio::test]
async fn counts_comments_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;
    let author = factory::create_user(db).await?;
    let lurker = factory::create_user(db).await?;

    factory::create_comment(db, project.id, author.id).await?;
    factory::create_comment(db, project.id, author.id).await?;

    assert_eq!(repo.count_by_author(author.id).await?, 2);
    assert_eq!(repo.count_by_author(lurker.id).await?, 0);

    Ok(())
}
