use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::semester::SemesterParams;

pub struct SemesterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SemesterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all semesters, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::semester::Model>, DbErr> {
        entity::prelude::Semester::find()
            .order_by_desc(entity::semester::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::semester::Model>, DbErr> {
        entity::prelude::Semester::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::semester::Model>, DbErr> {
        entity::prelude::Semester::find()
            .filter(entity::semester::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn create(&self, params: SemesterParams) -> Result<entity::semester::Model, DbErr> {
        entity::semester::ActiveModel {
            name: ActiveValue::Set(params.name),
            starts_on: ActiveValue::Set(params.starts_on),
            ends_on: ActiveValue::Set(params.ends_on),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates a semester's name and dates.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated semester
    /// - `Ok(None)` - No semester with that id
    pub async fn update(
        &self,
        id: i32,
        params: SemesterParams,
    ) -> Result<Option<entity::semester::Model>, DbErr> {
        let Some(semester) = entity::prelude::Semester::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::semester::ActiveModel = semester.into();
        active.name = ActiveValue::Set(params.name);
        active.starts_on = ActiveValue::Set(params.starts_on);
        active.ends_on = ActiveValue::Set(params.ends_on);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Semester::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
