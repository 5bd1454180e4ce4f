use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on the given project by the given author.
pub async fn create_comment(
    db: &DatabaseConnection,
    project_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        project_id: ActiveValue::Set(project_id),
        author_id: ActiveValue::Set(author_id),
        body: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
