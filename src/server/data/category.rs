use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn create(&self, name: String) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let Some(category) = entity::prelude::Category::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = category.into();
        active.name = ActiveValue::Set(name);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
