use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tag with a unique name and the given mention count.
pub async fn create_tag_with_mentions(
    db: &DatabaseConnection,
    mentions: i32,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(format!("tag-{}", next_id())),
        mentions: ActiveValue::Set(mentions),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a tag with a unique name and one mention.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    create_tag_with_mentions(db, 1).await
}
