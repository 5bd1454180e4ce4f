use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a roster entry with a unique email in the given semester.
pub async fn create_registered_student(
    db: &DatabaseConnection,
    semester_id: i32,
) -> Result<entity::registered_student::Model, DbErr> {
    let id = next_id();
    entity::registered_student::ActiveModel {
        email: ActiveValue::Set(format!("student{}@example.edu", id)),
        name: ActiveValue::Set(format!("Student {}", id)),
        semester_id: ActiveValue::Set(semester_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a roster entry with a specific email in the given semester.
pub async fn create_registered_student_with_email(
    db: &DatabaseConnection,
    semester_id: i32,
    email: impl Into<String>,
) -> Result<entity::registered_student::Model, DbErr> {
    entity::registered_student::ActiveModel {
        email: ActiveValue::Set(email.into()),
        name: ActiveValue::Set(format!("Student {}", next_id())),
        semester_id: ActiveValue::Set(semester_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
