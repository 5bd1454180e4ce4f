use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    semester_id: i32,
    category_id: Option<i32>,
    name: String,
    summary: String,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Project {id}"` where id is auto-incremented
    /// - summary: `"Summary of project {id}"`
    /// - category_id: `None`
    pub fn new(db: &'a DatabaseConnection, team_id: i32, semester_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            semester_id,
            category_id: None,
            name: format!("Project {}", id),
            summary: format!("Summary of project {}", id),
        }
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now();
        entity::project::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            semester_id: ActiveValue::Set(self.semester_id),
            category_id: ActiveValue::Set(self.category_id),
            name: ActiveValue::Set(self.name),
            summary: ActiveValue::Set(self.summary),
            description: ActiveValue::Set(None),
            repo_url: ActiveValue::Set(None),
            thumbnail_path: ActiveValue::Set(None),
            likes: ActiveValue::Set(0),
            favorites: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project for the given team and semester with default values.
pub async fn create_project(
    db: &DatabaseConnection,
    team_id: i32,
    semester_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, team_id, semester_id).build().await
}
