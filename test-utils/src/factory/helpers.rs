//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete project hierarchy with all dependencies.
///
/// This convenience method creates a semester, a team in it, and a project
/// registered by that team, all with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Returns
/// - `Ok((semester, team, project))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::semester::Model,
        entity::team::Model,
        entity::project::Model,
    ),
    DbErr,
> {
    let semester = crate::factory::semester::create_semester(db).await?;
    let team = crate::factory::team::create_team(db, semester.id).await?;
    let project = crate::factory::project::create_project(db, team.id, semester.id).await?;

    Ok((semester, team, project))
}

/// Creates a capstone student who belongs to a team.
///
/// Creates the semester and team as well, so the returned user is ready to
/// register a project.
///
/// # Returns
/// - `Ok((semester, team, user))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_team(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::semester::Model,
        entity::team::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let semester = crate::factory::semester::create_semester(db).await?;
    let team = crate::factory::team::create_team(db, semester.id).await?;
    let user = crate::factory::user::UserFactory::new(db)
        .role("capstone_student")
        .team_id(team.id)
        .build()
        .await?;

    Ok((semester, team, user))
}
