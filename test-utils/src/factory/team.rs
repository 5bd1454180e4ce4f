use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a team in the given semester with a unique name.
pub async fn create_team(
    db: &DatabaseConnection,
    semester_id: i32,
) -> Result<entity::team::Model, DbErr> {
    entity::team::ActiveModel {
        name: ActiveValue::Set(format!("Team {}", next_id())),
        semester_id: ActiveValue::Set(semester_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a team with a specific name in the given semester.
pub async fn create_team_with_name(
    db: &DatabaseConnection,
    semester_id: i32,
    name: impl Into<String>,
) -> Result<entity::team::Model, DbErr> {
    entity::team::ActiveModel {
        name: ActiveValue::Set(name.into()),
        semester_id: ActiveValue::Set(semester_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
