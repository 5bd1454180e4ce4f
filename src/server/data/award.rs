use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::award::AwardParams;

pub struct AwardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AwardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::award::Model>, DbErr> {
        entity::prelude::Award::find()
            .order_by_asc(entity::award::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::award::Model>, DbErr> {
        entity::prelude::Award::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, params: AwardParams) -> Result<entity::award::Model, DbErr> {
        entity::award::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            badge_path: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: AwardParams,
    ) -> Result<Option<entity::award::Model>, DbErr> {
        let Some(award) = entity::prelude::Award::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::award::ActiveModel = award.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn set_badge(&self, id: i32, badge_path: &str) -> Result<(), DbErr> {
        entity::prelude::Award::update_many()
            .filter(entity::award::Column::Id.eq(id))
            .col_expr(
                entity::award::Column::BadgePath,
                sea_orm::sea_query::Expr::value(badge_path),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Award::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    pub async fn find_grant(
        &self,
        award_id: i32,
        project_id: i32,
    ) -> Result<Option<entity::project_award::Model>, DbErr> {
        entity::prelude::ProjectAward::find()
            .filter(entity::project_award::Column::AwardId.eq(award_id))
            .filter(entity::project_award::Column::ProjectId.eq(project_id))
            .one(self.db)
            .await
    }

    pub async fn create_grant(&self, award_id: i32, project_id: i32) -> Result<(), DbErr> {
        entity::project_award::ActiveModel {
            award_id: ActiveValue::Set(award_id),
            project_id: ActiveValue::Set(project_id),
            granted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    pub async fn delete_grant(&self, award_id: i32, project_id: i32) -> Result<(), DbErr> {
        entity::prelude::ProjectAward::delete_many()
            .filter(entity::project_award::Column::AwardId.eq(award_id))
            .filter(entity::project_award::Column::ProjectId.eq(project_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets the awards granted to one project.
    pub async fn awards_for_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<entity::award::Model>, DbErr> {
        let grants = entity::prelude::ProjectAward::find()
            .filter(entity::project_award::Column::ProjectId.eq(project_id))
            .find_also_related(entity::prelude::Award)
            .all(self.db)
            .await?;

        Ok(grants.into_iter().filter_map(|(_, award)| award).collect())
    }
}
