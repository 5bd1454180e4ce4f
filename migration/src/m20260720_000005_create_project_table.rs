use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260720_000001_create_semester_table::Semester,
    m20260720_000002_create_category_table::Category, m20260720_000003_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(integer_uniq(Project::TeamId))
                    .col(integer(Project::SemesterId))
                    .col(integer_null(Project::CategoryId))
                    .col(string(Project::Name))
                    .col(string(Project::Summary))
                    .col(text_null(Project::Description))
                    .col(string_null(Project::RepoUrl))
                    .col(string_null(Project::ThumbnailPath))
                    .col(integer(Project::Likes).default(0))
                    .col(integer(Project::Favorites).default(0))
                    .col(
                        timestamp(Project::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Project::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_team_id")
                            .from(Project::Table, Project::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_semester_id")
                            .from(Project::Table, Project::SemesterId)
                            .to(Semester::Table, Semester::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_category_id")
                            .from(Project::Table, Project::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    TeamId,
    SemesterId,
    CategoryId,
    Name,
    Summary,
    Description,
    RepoUrl,
    ThumbnailPath,
    Likes,
    Favorites,
    CreatedAt,
    UpdatedAt,
}
