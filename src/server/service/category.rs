use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, project::ProjectRepository},
    error::AppError,
    model::category::Category,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let categories = repo.get_all().await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    pub async fn create(&self, name: &str) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("A category name is required.".to_string()));
        }

        if repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A category named '{}' already exists.",
                name
            )));
        }

        let category = repo.create(name).await?;

        Ok(Category::from_entity(category))
    }

    /// Renames a category.
    /// Returns None if the category doesn't exist.
    pub async fn update(&self, id: i32, name: &str) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("A category name is required.".to_string()));
        }

        if let Some(existing) = repo.find_by_name(&name).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "A category named '{}' already exists.",
                    name
                )));
            }
        }

        let updated = repo.update(id, name).await?;

        Ok(updated.map(Category::from_entity))
    }

    /// Deletes a category.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No category with that id
    /// - `Err(AppError::Conflict)` - Category still referenced by projects
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CategoryRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if project_repo.count_by_category(id).await? > 0 {
            return Err(AppError::Conflict(
                "Category is still used by projects; reassign those first.".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
