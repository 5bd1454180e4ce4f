//! Project data repository for database operations.
//!
//! Handles project rows, their gallery images, and the filtered listing query.
//! The listing combines semester, category, tag, and free-text filters; the
//! tag filter resolves the tag name first and short-circuits to an empty page
//! when the tag does not exist.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::project::{CreateProjectParams, ProjectFilter, UpdateProjectParams};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateProjectParams,
    ) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now();
        entity::project::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            semester_id: ActiveValue::Set(params.semester_id),
            category_id: ActiveValue::Set(params.category_id),
            name: ActiveValue::Set(params.name),
            summary: ActiveValue::Set(params.summary),
            description: ActiveValue::Set(params.description),
            repo_url: ActiveValue::Set(params.repo_url),
            thumbnail_path: ActiveValue::Set(None),
            likes: ActiveValue::Set(0),
            favorites: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_team(
        &self,
        team_id: i32,
    ) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::TeamId.eq(team_id))
            .one(self.db)
            .await
    }

    /// Checks whether a team has already registered a project.
    pub async fn exists_for_team(&self, team_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Project::find()
            .filter(entity::project::Column::TeamId.eq(team_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets paginated projects matching the filter, newest first.
    ///
    /// # Returns
    /// - `Ok((projects, total))` - Matching projects for the page and the
    ///   total match count
    /// - `Err(DbErr)` - Database error during the lookup
    pub async fn get_paginated(
        &self,
        filter: &ProjectFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::project::Model>, u64), DbErr> {
        let mut select = entity::prelude::Project::find();

        if let Some(semester_id) = filter.semester_id {
            select = select.filter(entity::project::Column::SemesterId.eq(semester_id));
        }

        if let Some(category_id) = filter.category_id {
            select = select.filter(entity::project::Column::CategoryId.eq(category_id));
        }

        if let Some(search) = filter.search.as_deref() {
            select = select.filter(
                Condition::any()
                    .add(entity::project::Column::Name.contains(search))
                    .add(entity::project::Column::Summary.contains(search)),
            );
        }

        if let Some(tag_name) = filter.tag.as_deref() {
            let Some(tag) = entity::prelude::Tag::find()
                .filter(entity::tag::Column::Name.eq(tag_name))
                .one(self.db)
                .await?
            else {
                return Ok((Vec::new(), 0));
            };

            let project_ids: Vec<i32> = entity::prelude::ProjectTag::find()
                .filter(entity::project_tag::Column::TagId.eq(tag.id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|binding| binding.project_id)
                .collect();

            if project_ids.is_empty() {
                return Ok((Vec::new(), 0));
            }

            select = select.filter(entity::project::Column::Id.is_in(project_ids));
        }

        let paginator = select
            .order_by_desc(entity::project::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let projects = paginator.fetch_page(page).await?;

        Ok((projects, total))
    }

    /// Updates a project's editable fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated project
    /// - `Ok(None)` - No project with that id
    pub async fn update(
        &self,
        params: UpdateProjectParams,
    ) -> Result<Option<entity::project::Model>, DbErr> {
        let Some(project) = entity::prelude::Project::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::project::ActiveModel = project.into();
        active.category_id = ActiveValue::Set(params.category_id);
        active.name = ActiveValue::Set(params.name);
        active.summary = ActiveValue::Set(params.summary);
        active.description = ActiveValue::Set(params.description);
        active.repo_url = ActiveValue::Set(params.repo_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn count_by_semester(&self, semester_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::SemesterId.eq(semester_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_category(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::CategoryId.eq(category_id))
            .count(self.db)
            .await
    }

    /// Appends a gallery image, placing it after the existing ones.
    pub async fn add_image(
        &self,
        project_id: i32,
        path: String,
    ) -> Result<entity::project_image::Model, DbErr> {
        let position = entity::prelude::ProjectImage::find()
            .filter(entity::project_image::Column::ProjectId.eq(project_id))
            .count(self.db)
            .await? as i32;

        entity::project_image::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            path: ActiveValue::Set(path),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn images_for_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<entity::project_image::Model>, DbErr> {
        entity::prelude::ProjectImage::find()
            .filter(entity::project_image::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::project_image::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn find_image(
        &self,
        image_id: i32,
    ) -> Result<Option<entity::project_image::Model>, DbErr> {
        entity::prelude::ProjectImage::find_by_id(image_id)
            .one(self.db)
            .await
    }

    pub async fn delete_image(&self, image_id: i32) -> Result<(), DbErr> {
        entity::prelude::ProjectImage::delete_by_id(image_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets or clears the project's thumbnail path.
    pub async fn set_thumbnail(
        &self,
        project_id: i32,
        path: Option<&str>,
    ) -> Result<(), DbErr> {
        entity::prelude::Project::update_many()
            .filter(entity::project::Column::Id.eq(project_id))
            .col_expr(
                entity::project::Column::ThumbnailPath,
                sea_orm::sea_query::Expr::value(path.map(|p| p.to_string())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
