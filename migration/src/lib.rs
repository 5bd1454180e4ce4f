pub use sea_orm_migration::prelude::*;

mod m20260720_000001_create_semester_table;
mod m20260720_000002_create_category_table;
mod m20260720_000003_create_team_table;
mod m20260720_000004_create_user_table;
mod m20260720_000005_create_project_table;
mod m20260720_000006_create_project_image_table;
mod m20260720_000007_create_tag_table;
mod m20260720_000008_create_project_tag_table;
mod m20260721_000009_create_comment_table;
mod m20260721_000010_create_award_table;
mod m20260721_000011_create_project_award_table;
mod m20260721_000012_create_project_like_table;
mod m20260721_000013_create_project_favorite_table;
mod m20260721_000014_create_registered_student_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260720_000001_create_semester_table::Migration),
            Box::new(m20260720_000002_create_category_table::Migration),
            Box::new(m20260720_000003_create_team_table::Migration),
            Box::new(m20260720_000004_create_user_table::Migration),
            Box::new(m20260720_000005_create_project_table::Migration),
            Box::new(m20260720_000006_create_project_image_table::Migration),
            Box::new(m20260720_000007_create_tag_table::Migration),
            Box::new(m20260720_000008_create_project_tag_table::Migration),
            Box::new(m20260721_000009_create_comment_table::Migration),
            Box::new(m20260721_000010_create_award_table::Migration),
            Box::new(m20260721_000011_create_project_award_table::Migration),
            Box::new(m20260721_000012_create_project_like_table::Migration),
            Box::new(m20260721_000013_create_project_favorite_table::Migration),
            Box::new(m20260721_000014_create_registered_student_table::Migration),
        ]
    }
}
