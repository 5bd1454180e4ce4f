use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct RosterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::registered_student::Model>, DbErr> {
        entity::prelude::RegisteredStudent::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Looks up a roster entry by its lowercased email, across all semesters.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::registered_student::Model>, DbErr> {
        entity::prelude::RegisteredStudent::find()
            .filter(entity::registered_student::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_by_semester_paginated(
        &self,
        semester_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::registered_student::Model>, u64), DbErr> {
        let paginator = entity::prelude::RegisteredStudent::find()
            .filter(entity::registered_student::Column::SemesterId.eq(semester_id))
            .order_by_asc(entity::registered_student::Column::Email)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let students = paginator.fetch_page(page).await?;

        Ok((students, total))
    }

    pub async fn insert(
        &self,
        semester_id: i32,
        email: String,
        name: String,
    ) -> Result<entity::registered_student::Model, DbErr> {
        entity::registered_student::ActiveModel {
            email: ActiveValue::Set(email),
            name: ActiveValue::Set(name),
            semester_id: ActiveValue::Set(semester_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Moves an existing roster entry to a semester and refreshes its name.
    pub async fn update_entry(
        &self,
        id: i32,
        semester_id: i32,
        name: String,
    ) -> Result<Option<entity::registered_student::Model>, DbErr> {
        let Some(entry) = entity::prelude::RegisteredStudent::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::registered_student::ActiveModel = entry.into();
        active.semester_id = ActiveValue::Set(semester_id);
        active.name = ActiveValue::Set(name);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RegisteredStudent::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
