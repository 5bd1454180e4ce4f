use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Semester, Team, User};
///
/// let test = TestBuilder::new()
///     .with_table(Semester)
///     .with_table(Team)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in the order
    /// they were added.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for project operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// Semester, Category, Team, User, Project, ProjectImage, Tag, ProjectTag.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_project_tables(self) -> Self {
        self.with_table(Semester)
            .with_table(Category)
            .with_table(Team)
            .with_table(User)
            .with_table(Project)
            .with_table(ProjectImage)
            .with_table(Tag)
            .with_table(ProjectTag)
    }

    /// Adds all project tables plus the like/favorite tables.
    ///
    /// Use this when testing the engagement toggles and their counters.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_engagement_tables(self) -> Self {
        self.with_project_tables()
            .with_table(ProjectLike)
            .with_table(ProjectFavorite)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
