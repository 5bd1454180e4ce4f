//! Tag service: binding, unbinding, and mention-count maintenance.
//!
//! The invariant maintained here is that a tag's `mentions` column always
//! equals the number of `project_tag` rows referencing it. Binding an existing
//! tag increments the counter; a tag created by its first binding starts at 1;
//! unbinding decrements it, and a tag whose counter reaches zero is deleted so
//! orphaned tags never accumulate.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{project::ProjectRepository, tag::TagRepository},
    error::AppError,
    model::tag::Tag,
    util::parse::normalize_tag_name,
};

/// A project holds at most this many tags.
pub const MAX_TAGS_PER_PROJECT: u64 = 5;

/// Longest accepted normalized tag name.
const MAX_TAG_NAME_LENGTH: usize = 32;

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists tags ordered by popularity, optionally filtered by substring.
    pub async fn get_all(&self, search: Option<&str>) -> Result<Vec<Tag>, AppError> {
        let repo = TagRepository::new(self.db);

        let tags = repo.get_all(search).await?;

        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }

    /// Binds a tag to a project, creating the tag if it doesn't exist yet.
    ///
    /// # Returns
    /// - `Ok(Tag)` - The bound tag with its updated mention count
    /// - `Err(AppError::NotFound)` - Project does not exist
    /// - `Err(AppError::BadRequest)` - Empty/overlong tag name, or the project
    ///   already holds the maximum number of tags
    /// - `Err(AppError::Conflict)` - Tag is already bound to this project
    pub async fn bind(&self, project_id: i32, raw_name: &str) -> Result<Tag, AppError> {
        let tag_repo = TagRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);

        if project_repo.find_by_id(project_id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let name = normalize_tag_name(raw_name);
        if name.is_empty() {
            return Err(AppError::BadRequest("A tag name is required.".to_string()));
        }
        if name.len() > MAX_TAG_NAME_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Tag names are limited to {} characters.",
                MAX_TAG_NAME_LENGTH
            )));
        }

        let bound = tag_repo.count_bindings_for_project(project_id).await?;
        if bound >= MAX_TAGS_PER_PROJECT {
            return Err(AppError::BadRequest(format!(
                "A project can hold at most {} tags.",
                MAX_TAGS_PER_PROJECT
            )));
        }

        match tag_repo.find_by_name(&name).await? {
            Some(tag) => {
                if tag_repo.find_binding(project_id, tag.id).await?.is_some() {
                    return Err(AppError::Conflict(format!(
                        "Tag '{}' is already bound to this project.",
                        name
                    )));
                }

                tag_repo.create_binding(project_id, tag.id).await?;
                tag_repo.increment_mentions(tag.id).await?;

                let updated = tag_repo
                    .find_by_id(tag.id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Tag not found after binding".to_string()))?;

                Ok(Tag::from_entity(updated))
            }
            None => {
                // First mention creates the tag with mentions already at 1.
                let tag = tag_repo.create(name).await?;
                tag_repo.create_binding(project_id, tag.id).await?;

                Ok(Tag::from_entity(tag))
            }
        }
    }

    /// Unbinds a tag from a project, pruning the tag once nothing references it.
    ///
    /// # Returns
    /// - `Ok(())` - Binding removed; tag deleted if its mentions reached zero
    /// - `Err(AppError::NotFound)` - Tag does not exist or is not bound to the
    ///   project
    pub async fn unbind(&self, project_id: i32, tag_id: i32) -> Result<(), AppError> {
        let tag_repo = TagRepository::new(self.db);

        if tag_repo.find_by_id(tag_id).await?.is_none() {
            return Err(AppError::NotFound("Tag not found".to_string()));
        }

        if tag_repo.find_binding(project_id, tag_id).await?.is_none() {
            return Err(AppError::NotFound(
                "Tag is not bound to this project".to_string(),
            ));
        }

        tag_repo.delete_binding(project_id, tag_id).await?;
        tag_repo.decrement_mentions(tag_id).await?;

        if let Some(tag) = tag_repo.find_by_id(tag_id).await? {
            if tag.mentions <= 0 {
                tag_repo.delete(tag_id).await?;
            }
        }

        Ok(())
    }

    /// Unbinds every tag from a project, with the same prune behavior as
    /// individual unbinds. Called before project deletion.
    pub async fn unbind_all(&self, project_id: i32) -> Result<(), AppError> {
        let tag_repo = TagRepository::new(self.db);

        let tags = tag_repo.tags_for_project(project_id).await?;
        for tag in tags {
            self.unbind(project_id, tag.id).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::data::tag::TagRepository;
    use test_utils::{builder::TestBuilder, error::TestError, factory};

    /// Tests that a first binding creates the tag with one mention and a
    /// normalized name.
    ///
    /// Expected: mentions 1, name lowercased and hyphenated
    #[tokio::test]
    async fn first_binding_creates_tag() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;

        let service = TagService::new(db);
        let tag = service.bind(project.id, "Machine Learning").await.unwrap();

        assert_eq!(tag.name, "machine-learning");
        assert_eq!(tag.mentions, 1);

        Ok(())
    }

    /// Tests that binding an existing tag increments its mention count.
    ///
    /// Expected: mentions 2 after a second project binds the same tag
    #[tokio::test]
    async fn binding_existing_tag_increments_mentions() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (semester, _, first) = factory::helpers::create_project_with_dependencies(db).await?;
        let other_team = factory::create_team(db, semester.id).await?;
        let second = factory::create_project(db, other_team.id, semester.id).await?;

        let service = TagService::new(db);
        service.bind(first.id, "rust").await.unwrap();
        let tag = service.bind(second.id, "rust").await.unwrap();

        assert_eq!(tag.mentions, 2);

        Ok(())
    }

    /// Tests that binding the same tag to the same project twice conflicts
    /// without disturbing the counter.
    ///
    /// Expected: Err(Conflict), mentions still 1
    #[tokio::test]
    async fn duplicate_binding_is_rejected() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;

        let service = TagService::new(db);
        service.bind(project.id, "rust").await.unwrap();

        let duplicate = service.bind(project.id, "rust").await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));

        let tag_repo = TagRepository::new(db);
        let tag = tag_repo.find_by_name("rust").await?.unwrap();
        assert_eq!(tag.mentions, 1);

        Ok(())
    }

    /// Tests the five-tag cap on a project.
    ///
    /// Expected: Err(BadRequest) on the sixth binding
    #[tokio::test]
    async fn sixth_tag_is_rejected() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;

        let service = TagService::new(db);
        for name in ["one", "two", "three", "four", "five"] {
            service.bind(project.id, name).await.unwrap();
        }

        let sixth = service.bind(project.id, "six").await;
        assert!(matches!(sixth, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests that unbinding decrements the counter but keeps a tag other
    /// projects still reference.
    ///
    /// Expected: tag survives with mentions 1
    #[tokio::test]
    async fn unbind_keeps_shared_tag() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (semester, _, first) = factory::helpers::create_project_with_dependencies(db).await?;
        let other_team = factory::create_team(db, semester.id).await?;
        let second = factory::create_project(db, other_team.id, semester.id).await?;

        let service = TagService::new(db);
        let tag = service.bind(first.id, "rust").await.unwrap();
        service.bind(second.id, "rust").await.unwrap();

        service.unbind(first.id, tag.id).await.unwrap();

        let tag_repo = TagRepository::new(db);
        let remaining = tag_repo.find_by_name("rust").await?.unwrap();
        assert_eq!(remaining.mentions, 1);

        Ok(())
    }

    /// Tests that a tag is pruned when its last mention is unbound.
    ///
    /// Expected: tag row deleted
    #[tokio::test]
    async fn unbind_last_mention_prunes_tag() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;

        let service = TagService::new(db);
        let tag = service.bind(project.id, "rust").await.unwrap();

        service.unbind(project.id, tag.id).await.unwrap();

        let tag_repo = TagRepository::new(db);
        assert!(tag_repo.find_by_name("rust").await?.is_none());

        Ok(())
    }

    /// Tests unbinding a tag that was never bound to the project.
    ///
    /// Expected: Err(NotFound), counter untouched
    #[tokio::test]
    async fn unbind_unbound_tag_is_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;
        let tag = factory::create_tag(db).await?;

        let service = TagService::new(db);
        let result = service.unbind(project.id, tag.id).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        let tag_repo = TagRepository::new(db);
        assert_eq!(tag_repo.find_by_id(tag.id).await?.unwrap().mentions, 1);

        Ok(())
    }
}
