//! Project service for registration, listing, media, and engagement logic.
//!
//! Enforces the one-project-per-team rule on registration, assembles listing
//! cards and detail views from the related repositories, and owns the
//! like/favorite toggles that keep the denormalized counters on the project
//! row consistent with the engagement rows.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        award::AwardRepository, category::CategoryRepository, engagement::EngagementRepository,
        project::ProjectRepository, tag::TagRepository, team::TeamRepository,
    },
    error::AppError,
    model::{
        award::Award,
        project::{
            CreateProjectParams, FavoriteState, LikeState, PaginatedProjects, Project,
            ProjectCard, ProjectDetail, ProjectFilter, ProjectImage, UpdateProjectParams,
        },
        tag::Tag,
        user::User,
    },
    service::tag::TagService,
};

/// Input for registering a project, before the owning team is resolved.
#[derive(Debug, Clone)]
pub struct RegisterProjectInput {
    pub name: String,
    pub summary: String,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub category_id: Option<i32>,
}

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a project for the student's team.
    ///
    /// The owning team and semester are taken from the creating user, never
    /// from the request, and a team can only ever hold one project.
    ///
    /// # Returns
    /// - `Ok(ProjectDetail)` - The newly registered project
    /// - `Err(AppError::BadRequest)` - Caller has no team, unknown category,
    ///   or missing name/summary
    /// - `Err(AppError::Conflict)` - The team already registered a project
    pub async fn register(
        &self,
        user: &User,
        input: RegisterProjectInput,
    ) -> Result<ProjectDetail, AppError> {
        let project_repo = ProjectRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);

        let Some(team_id) = user.team_id else {
            return Err(AppError::BadRequest(
                "Join a team before registering a project.".to_string(),
            ));
        };

        let team = team_repo
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        if project_repo.exists_for_team(team_id).await? {
            return Err(AppError::Conflict(
                "This team has already registered a project.".to_string(),
            ));
        }

        let name = input.name.trim().to_string();
        let summary = input.summary.trim().to_string();
        if name.is_empty() || summary.is_empty() {
            return Err(AppError::BadRequest(
                "A project name and summary are required.".to_string(),
            ));
        }

        self.validate_category(input.category_id).await?;

        let project = project_repo
            .create(CreateProjectParams {
                team_id,
                semester_id: team.semester_id,
                category_id: input.category_id,
                name,
                summary,
                description: input.description,
                repo_url: input.repo_url,
            })
            .await?;

        self.get_detail(project.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found after creation".to_string()))
    }

    /// Gets a project's full detail view with all related display data.
    pub async fn get_detail(&self, id: i32) -> Result<Option<ProjectDetail>, AppError> {
        let project_repo = ProjectRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);
        let tag_repo = TagRepository::new(self.db);
        let award_repo = AwardRepository::new(self.db);
        let category_repo = CategoryRepository::new(self.db);

        let Some(entity) = project_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let team_name = team_repo
            .find_by_id(entity.team_id)
            .await?
            .map(|t| t.name)
            .unwrap_or_default();

        let category_name = match entity.category_id {
            Some(category_id) => category_repo.find_by_id(category_id).await?.map(|c| c.name),
            None => None,
        };

        let tags = tag_repo
            .tags_for_project(id)
            .await?
            .into_iter()
            .map(Tag::from_entity)
            .collect();

        let images = project_repo
            .images_for_project(id)
            .await?
            .into_iter()
            .map(ProjectImage::from_entity)
            .collect();

        let awards = award_repo
            .awards_for_project(id)
            .await?
            .into_iter()
            .map(Award::from_entity)
            .collect();

        Ok(Some(ProjectDetail {
            project: Project::from_entity(entity),
            team_name,
            category_name,
            tags,
            images,
            awards,
        }))
    }

    /// Gets paginated projects matching the filter, newest first.
    pub async fn get_paginated(
        &self,
        filter: &ProjectFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProjects, AppError> {
        let project_repo = ProjectRepository::new(self.db);

        let (entities, total) = project_repo.get_paginated(filter, page, per_page).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        let projects = self.build_cards(entities).await?;

        Ok(PaginatedProjects {
            projects,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates a project's editable fields.
    /// Returns None if the project doesn't exist.
    pub async fn update(
        &self,
        params: UpdateProjectParams,
    ) -> Result<Option<ProjectDetail>, AppError> {
        let project_repo = ProjectRepository::new(self.db);

        let name = params.name.trim().to_string();
        let summary = params.summary.trim().to_string();
        if name.is_empty() || summary.is_empty() {
            return Err(AppError::BadRequest(
                "A project name and summary are required.".to_string(),
            ));
        }

        self.validate_category(params.category_id).await?;

        let updated = project_repo
            .update(UpdateProjectParams {
                name,
                summary,
                ..params
            })
            .await?;

        match updated {
            Some(project) => self.get_detail(project.id).await,
            None => Ok(None),
        }
    }

    /// Deletes a project.
    ///
    /// Tags are unbound first so their mention counts stay consistent and
    /// orphaned tags are pruned; images, comments, likes, and favorites go
    /// with the row via cascade. Uploaded files stay on disk for the operator
    /// to garbage collect.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let project_repo = ProjectRepository::new(self.db);
        let tag_service = TagService::new(self.db);

        if project_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        tag_service.unbind_all(id).await?;
        project_repo.delete(id).await?;

        Ok(())
    }

    /// Attaches a stored gallery image to the project.
    pub async fn add_image(
        &self,
        project_id: i32,
        path: String,
    ) -> Result<ProjectImage, AppError> {
        let project_repo = ProjectRepository::new(self.db);

        if project_repo.find_by_id(project_id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let image = project_repo.add_image(project_id, path).await?;

        Ok(ProjectImage::from_entity(image))
    }

    /// Removes a gallery image; clears the thumbnail if it pointed at it.
    pub async fn remove_image(&self, project_id: i32, image_id: i32) -> Result<(), AppError> {
        let project_repo = ProjectRepository::new(self.db);

        let project = project_repo
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        let image = project_repo
            .find_image(image_id)
            .await?
            .filter(|i| i.project_id == project_id)
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        if project.thumbnail_path.as_deref() == Some(image.path.as_str()) {
            project_repo.set_thumbnail(project_id, None).await?;
        }

        project_repo.delete_image(image_id).await?;

        Ok(())
    }

    /// Points the project's thumbnail at one of its gallery images.
    pub async fn set_thumbnail(&self, project_id: i32, image_id: i32) -> Result<(), AppError> {
        let project_repo = ProjectRepository::new(self.db);

        if project_repo.find_by_id(project_id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let image = project_repo
            .find_image(image_id)
            .await?
            .filter(|i| i.project_id == project_id)
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        project_repo.set_thumbnail(project_id, Some(&image.path)).await?;

        Ok(())
    }

    /// Toggles the caller's like on a project.
    ///
    /// # Returns
    /// - `Ok(LikeState)` - Whether the project is now liked, and the counter
    ///   after the toggle
    /// - `Err(AppError::NotFound)` - Project does not exist
    pub async fn toggle_like(
        &self,
        user_id: i32,
        project_id: i32,
    ) -> Result<LikeState, AppError> {
        let project_repo = ProjectRepository::new(self.db);
        let engagement_repo = EngagementRepository::new(self.db);

        if project_repo.find_by_id(project_id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let liked = match engagement_repo.find_like(user_id, project_id).await? {
            Some(like) => {
                engagement_repo.delete_like(like.id).await?;
                engagement_repo.adjust_like_count(project_id, -1).await?;
                false
            }
            None => {
                engagement_repo.create_like(user_id, project_id).await?;
                engagement_repo.adjust_like_count(project_id, 1).await?;
                true
            }
        };

        let project = project_repo
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        Ok(LikeState {
            liked,
            likes: project.likes,
        })
    }

    /// Toggles the caller's favorite on a project.
    pub async fn toggle_favorite(
        &self,
        user_id: i32,
        project_id: i32,
    ) -> Result<FavoriteState, AppError> {
        let project_repo = ProjectRepository::new(self.db);
        let engagement_repo = EngagementRepository::new(self.db);

        if project_repo.find_by_id(project_id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let favorited = match engagement_repo.find_favorite(user_id, project_id).await? {
            Some(favorite) => {
                engagement_repo.delete_favorite(favorite.id).await?;
                engagement_repo.adjust_favorite_count(project_id, -1).await?;
                false
            }
            None => {
                engagement_repo.create_favorite(user_id, project_id).await?;
                engagement_repo.adjust_favorite_count(project_id, 1).await?;
                true
            }
        };

        let project = project_repo
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        Ok(FavoriteState {
            favorited,
            favorites: project.favorites,
        })
    }

    /// Gets the projects a user has favorited, as listing cards.
    pub async fn favorites_for_user(&self, user_id: i32) -> Result<Vec<ProjectCard>, AppError> {
        let engagement_repo = EngagementRepository::new(self.db);

        let projects = engagement_repo.favorite_projects_for_user(user_id).await?;

        self.build_cards(projects).await
    }

    /// Builds listing cards for a set of project rows, batching the tag and
    /// category lookups instead of querying per project.
    pub async fn build_cards(
        &self,
        entities: Vec<entity::project::Model>,
    ) -> Result<Vec<ProjectCard>, AppError> {
        let tag_repo = TagRepository::new(self.db);
        let category_repo = CategoryRepository::new(self.db);

        let project_ids: Vec<i32> = entities.iter().map(|p| p.id).collect();

        let mut tags_by_project: HashMap<i32, Vec<Tag>> = HashMap::new();
        for (project_id, tag) in tag_repo.tags_for_projects(&project_ids).await? {
            tags_by_project
                .entry(project_id)
                .or_default()
                .push(Tag::from_entity(tag));
        }

        let categories: HashMap<i32, String> = category_repo
            .get_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(entities
            .into_iter()
            .map(|entity| {
                let category_name = entity
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                let tags = tags_by_project.remove(&entity.id).unwrap_or_default();

                ProjectCard {
                    project: Project::from_entity(entity),
                    category_name,
                    tags,
                }
            })
            .collect())
    }

    async fn validate_category(&self, category_id: Option<i32>) -> Result<(), AppError> {
        if let Some(category_id) = category_id {
            let category_repo = CategoryRepository::new(self.db);
            if category_repo.find_by_id(category_id).await?.is_none() {
                return Err(AppError::BadRequest("Unknown category.".to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{data::tag::TagRepository, service::tag::TagService};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, error::TestError, factory};

    fn sample_input() -> RegisterProjectInput {
        RegisterProjectInput {
            name: "Solar Tracker".to_string(),
            summary: "Panels that follow the sun".to_string(),
            description: None,
            repo_url: None,
            category_id: None,
        }
    }

    /// Tests that registration requires the caller to belong to a team.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn register_requires_team() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let entity = factory::user::UserFactory::new(db)
            .role("capstone_student")
            .build()
            .await?;
        let user = User::from_entity(entity).unwrap();

        let service = ProjectService::new(db);
        let result = service.register(&user, sample_input()).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests the one-project-per-team rule at the service level.
    ///
    /// Expected: Err(Conflict) when a teammate registers a second project
    #[tokio::test]
    async fn second_project_for_team_conflicts() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (_, _, student) = factory::helpers::create_student_with_team(db).await?;
        let user = User::from_entity(student).unwrap();

        let service = ProjectService::new(db);
        service.register(&user, sample_input()).await.unwrap();

        let second = service
            .register(
                &user,
                RegisterProjectInput {
                    name: "Second Attempt".to_string(),
                    summary: "Should not exist".to_string(),
                    description: None,
                    repo_url: None,
                    category_id: None,
                },
            )
            .await;

        assert!(matches!(second, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests that the like toggle inserts, counts, and reverses.
    ///
    /// Expected: liked with counter 1 after the first toggle, unliked with
    /// counter 0 after the second, and the project row matching both times
    #[tokio::test]
    async fn like_toggle_maintains_counter() -> Result<(), TestError> {
        let test = TestBuilder::new().with_engagement_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;
        let user = factory::create_user(db).await?;

        let service = ProjectService::new(db);

        let state = service.toggle_like(user.id, project.id).await.unwrap();
        assert!(state.liked);
        assert_eq!(state.likes, 1);

        let row = entity::prelude::Project::find_by_id(project.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(row.likes, 1);

        let state = service.toggle_like(user.id, project.id).await.unwrap();
        assert!(!state.liked);
        assert_eq!(state.likes, 0);

        let row = entity::prelude::Project::find_by_id(project.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(row.likes, 0);

        Ok(())
    }

    /// Tests that favorites from different users accumulate independently.
    ///
    /// Expected: counter 2 with both users, 1 after one un-favorites
    #[tokio::test]
    async fn favorites_count_per_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_engagement_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (_, _, project) = factory::helpers::create_project_with_dependencies(db).await?;
        let first = factory::create_user(db).await?;
        let second = factory::create_user(db).await?;

        let service = ProjectService::new(db);

        service.toggle_favorite(first.id, project.id).await.unwrap();
        let state = service.toggle_favorite(second.id, project.id).await.unwrap();
        assert!(state.favorited);
        assert_eq!(state.favorites, 2);

        let state = service.toggle_favorite(first.id, project.id).await.unwrap();
        assert!(!state.favorited);
        assert_eq!(state.favorites, 1);

        let favorites = service.favorites_for_user(second.id).await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].project.id, project.id);

        Ok(())
    }

    /// Tests that deleting a project unbinds its tags with prune semantics
    /// and cascades its images away.
    ///
    /// Expected: project-only tag deleted, shared tag kept at one mention,
    /// no image rows left
    #[tokio::test]
    async fn delete_prunes_tags_and_cascades_images() -> Result<(), TestError> {
        let test = TestBuilder::new().with_engagement_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let (semester, _, project) = factory::helpers::create_project_with_dependencies(db).await?;
        let other_team = factory::create_team(db, semester.id).await?;
        let other_project = factory::create_project(db, other_team.id, semester.id).await?;

        let tag_service = TagService::new(db);
        tag_service.bind(project.id, "orphan-to-be").await.unwrap();
        tag_service.bind(project.id, "shared").await.unwrap();
        tag_service.bind(other_project.id, "shared").await.unwrap();

        let service = ProjectService::new(db);
        service
            .add_image(project.id, "projects/a.png".to_string())
            .await
            .unwrap();

        service.delete(project.id).await.unwrap();

        let tag_repo = TagRepository::new(db);
        assert!(tag_repo.find_by_name("orphan-to-be").await?.is_none());
        assert_eq!(
            tag_repo.find_by_name("shared").await?.unwrap().mentions,
            1
        );

        let image_count = entity::prelude::ProjectImage::find().count(db).await?;
        assert_eq!(image_count, 0);

        Ok(())
    }
}
