use sea_orm::DatabaseConnection;

use crate::server::{
    data::{project::ProjectRepository, semester::SemesterRepository, team::TeamRepository},
    error::AppError,
    model::semester::{Semester, SemesterParams},
};

pub struct SemesterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SemesterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Semester>, AppError> {
        let repo = SemesterRepository::new(self.db);

        let semesters = repo.get_all().await?;

        Ok(semesters.into_iter().map(Semester::from_entity).collect())
    }

    /// Creates a semester; names are unique across the platform.
    pub async fn create(&self, params: SemesterParams) -> Result<Semester, AppError> {
        let repo = SemesterRepository::new(self.db);

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("A semester name is required.".to_string()));
        }

        if repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A semester named '{}' already exists.",
                name
            )));
        }

        let semester = repo.create(SemesterParams { name, ..params }).await?;

        Ok(Semester::from_entity(semester))
    }

    /// Updates a semester's name and dates.
    /// Returns None if the semester doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: SemesterParams,
    ) -> Result<Option<Semester>, AppError> {
        let repo = SemesterRepository::new(self.db);

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("A semester name is required.".to_string()));
        }

        if let Some(existing) = repo.find_by_name(&name).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "A semester named '{}' already exists.",
                    name
                )));
            }
        }

        let updated = repo.update(id, SemesterParams { name, ..params }).await?;

        Ok(updated.map(Semester::from_entity))
    }

    /// Deletes a semester.
    ///
    /// Semesters that still have teams or projects cannot be removed.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No semester with that id
    /// - `Err(AppError::Conflict)` - Semester still referenced
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = SemesterRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if team_repo.count_by_semester(id).await? > 0 {
            return Err(AppError::Conflict(
                "Semester still has teams; delete those first.".to_string(),
            ));
        }

        if project_repo.count_by_semester(id).await? > 0 {
            return Err(AppError::Conflict(
                "Semester still has projects; delete those first.".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
