use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::team::CreateTeamParams;

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTeamParams) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            semester_id: ActiveValue::Set(params.semester_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    /// Looks up a team by its name within one semester.
    ///
    /// Team names are only unique per semester, so lookups must always be
    /// scoped this way.
    pub async fn find_by_name_in_semester(
        &self,
        name: &str,
        semester_id: i32,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .filter(entity::team::Column::SemesterId.eq(semester_id))
            .one(self.db)
            .await
    }

    /// Gets paginated teams for a semester, ordered alphabetically by name.
    pub async fn get_by_semester_paginated(
        &self,
        semester_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::team::Model>, u64), DbErr> {
        let paginator = entity::prelude::Team::find()
            .filter(entity::team::Column::SemesterId.eq(semester_id))
            .order_by_asc(entity::team::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let teams = paginator.fetch_page(page).await?;

        Ok((teams, total))
    }

    pub async fn count_by_semester(&self, semester_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::SemesterId.eq(semester_id))
            .count(self.db)
            .await
    }

    pub async fn update_name(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        let Some(team) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = team.into();
        active.name = ActiveValue::Set(name);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
