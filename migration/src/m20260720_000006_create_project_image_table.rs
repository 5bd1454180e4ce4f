use sea_orm_migration::{prelude::*, schema::*};

use super::m20260720_000005_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectImage::Id))
                    .col(integer(ProjectImage::ProjectId))
                    .col(string(ProjectImage::Path))
                    .col(integer(ProjectImage::Position).default(0))
                    .col(
                        timestamp(ProjectImage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_image_project_id")
                            .from(ProjectImage::Table, ProjectImage::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectImage {
    Table,
    Id,
    ProjectId,
    Path,
    Position,
    CreatedAt,
}
