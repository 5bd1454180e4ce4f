use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an award with a unique name.
pub async fn create_award(db: &DatabaseConnection) -> Result<entity::award::Model, DbErr> {
    entity::award::ActiveModel {
        name: ActiveValue::Set(format!("Award {}", next_id())),
        description: ActiveValue::Set(None),
        badge_path: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
