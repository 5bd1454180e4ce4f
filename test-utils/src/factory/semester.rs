use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a semester with a unique name.
pub async fn create_semester(db: &DatabaseConnection) -> Result<entity::semester::Model, DbErr> {
    let id = next_id();
    entity::semester::ActiveModel {
        name: ActiveValue::Set(format!("Semester {}", id)),
        starts_on: ActiveValue::Set(None),
        ends_on: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a semester with a specific name.
pub async fn create_semester_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::semester::Model, DbErr> {
    entity::semester::ActiveModel {
        name: ActiveValue::Set(name.into()),
        starts_on: ActiveValue::Set(None),
        ends_on: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
