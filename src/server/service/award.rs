use sea_orm::DatabaseConnection;

use crate::server::{
    data::{award::AwardRepository, project::ProjectRepository},
    error::AppError,
    model::award::{Award, AwardParams},
};

pub struct AwardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AwardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Award>, AppError> {
        let repo = AwardRepository::new(self.db);

        let awards = repo.get_all().await?;

        Ok(awards.into_iter().map(Award::from_entity).collect())
    }

    pub async fn create(&self, params: AwardParams) -> Result<Award, AppError> {
        let repo = AwardRepository::new(self.db);

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("An award name is required.".to_string()));
        }

        let award = repo.create(AwardParams { name, ..params }).await?;

        Ok(Award::from_entity(award))
    }

    /// Updates an award's name and description.
    /// Returns None if the award doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: AwardParams,
    ) -> Result<Option<Award>, AppError> {
        let repo = AwardRepository::new(self.db);

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("An award name is required.".to_string()));
        }

        let updated = repo.update(id, AwardParams { name, ..params }).await?;

        Ok(updated.map(Award::from_entity))
    }

    /// Records a freshly stored badge image on the award.
    pub async fn set_badge(&self, id: i32, badge_path: &str) -> Result<Award, AppError> {
        let repo = AwardRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Award not found".to_string()));
        }

        repo.set_badge(id, badge_path).await?;

        let award = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Award not found".to_string()))?;

        Ok(Award::from_entity(award))
    }

    /// Deletes an award; grants cascade away with it.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No award with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AwardRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Grants an award to a project.
    ///
    /// # Returns
    /// - `Ok(())` - Granted
    /// - `Err(AppError::NotFound)` - Award or project does not exist
    /// - `Err(AppError::Conflict)` - Project already holds this award
    pub async fn grant(&self, award_id: i32, project_id: i32) -> Result<(), AppError> {
        let repo = AwardRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);

        if repo.find_by_id(award_id).await?.is_none() {
            return Err(AppError::NotFound("Award not found".to_string()));
        }

        if project_repo.find_by_id(project_id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        if repo.find_grant(award_id, project_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Project already holds this award.".to_string(),
            ));
        }

        repo.create_grant(award_id, project_id).await?;

        Ok(())
    }

    /// Revokes an award from a project.
    pub async fn revoke(&self, award_id: i32, project_id: i32) -> Result<(), AppError> {
        let repo = AwardRepository::new(self.db);

        if repo.find_grant(award_id, project_id).await?.is_none() {
            return Err(AppError::NotFound(
                "Project does not hold this award.".to_string(),
            ));
        }

        repo.delete_grant(award_id, project_id).await?;

        Ok(())
    }
}
