//! Tag data repository for tags and project-tag bindings.
//!
//! The `mentions` column on a tag is a denormalized count of its bindings.
//! This repository exposes the raw operations (create, increment, decrement,
//! delete, bind, unbind); keeping the counter consistent with the binding
//! rows is the tag service's responsibility.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Creates a tag with its first mention already counted.
    pub async fn create(&self, name: String) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(name),
            mentions: ActiveValue::Set(1),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn increment_mentions(&self, tag_id: i32) -> Result<(), DbErr> {
        entity::prelude::Tag::update_many()
            .filter(entity::tag::Column::Id.eq(tag_id))
            .col_expr(
                entity::tag::Column::Mentions,
                sea_orm::sea_query::Expr::col(entity::tag::Column::Mentions).add(1),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn decrement_mentions(&self, tag_id: i32) -> Result<(), DbErr> {
        entity::prelude::Tag::update_many()
            .filter(entity::tag::Column::Id.eq(tag_id))
            .col_expr(
                entity::tag::Column::Mentions,
                sea_orm::sea_query::Expr::col(entity::tag::Column::Mentions).sub(1),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, tag_id: i32) -> Result<(), DbErr> {
        entity::prelude::Tag::delete_by_id(tag_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Lists tags ordered by popularity, optionally filtered by a name
    /// substring.
    pub async fn get_all(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<entity::tag::Model>, DbErr> {
        let mut select = entity::prelude::Tag::find();

        if let Some(search) = search {
            select = select.filter(entity::tag::Column::Name.contains(search));
        }

        select
            .order_by_desc(entity::tag::Column::Mentions)
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_binding(
        &self,
        project_id: i32,
        tag_id: i32,
    ) -> Result<Option<entity::project_tag::Model>, DbErr> {
        entity::prelude::ProjectTag::find()
            .filter(entity::project_tag::Column::ProjectId.eq(project_id))
            .filter(entity::project_tag::Column::TagId.eq(tag_id))
            .one(self.db)
            .await
    }

    pub async fn count_bindings_for_project(&self, project_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ProjectTag::find()
            .filter(entity::project_tag::Column::ProjectId.eq(project_id))
            .count(self.db)
            .await
    }

    pub async fn create_binding(&self, project_id: i32, tag_id: i32) -> Result<(), DbErr> {
        entity::project_tag::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            tag_id: ActiveValue::Set(tag_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    pub async fn delete_binding(&self, project_id: i32, tag_id: i32) -> Result<(), DbErr> {
        entity::prelude::ProjectTag::delete_many()
            .filter(entity::project_tag::Column::ProjectId.eq(project_id))
            .filter(entity::project_tag::Column::TagId.eq(tag_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets the tags bound to one project.
    pub async fn tags_for_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<entity::tag::Model>, DbErr> {
        let bindings = entity::prelude::ProjectTag::find()
            .filter(entity::project_tag::Column::ProjectId.eq(project_id))
            .find_also_related(entity::prelude::Tag)
            .all(self.db)
            .await?;

        Ok(bindings
            .into_iter()
            .filter_map(|(_, tag)| tag)
            .collect())
    }

    /// Gets the tags bound to each of the given projects in one query.
    ///
    /// Returns (project_id, tag) pairs; the caller groups them per project.
    pub async fn tags_for_projects(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<(i32, entity::tag::Model)>, DbErr> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let bindings = entity::prelude::ProjectTag::find()
            .filter(entity::project_tag::Column::ProjectId.is_in(project_ids.to_vec()))
            .find_also_related(entity::prelude::Tag)
            .all(self.db)
            .await?;

        Ok(bindings
            .into_iter()
            .filter_map(|(binding, tag)| tag.map(|t| (binding.project_id, t)))
            .collect())
    }
}
