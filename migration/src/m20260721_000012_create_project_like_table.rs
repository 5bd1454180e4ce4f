use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260720_000004_create_user_table::User, m20260720_000005_create_project_table::Project,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectLike::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectLike::Id))
                    .col(integer(ProjectLike::UserId))
                    .col(integer(ProjectLike::ProjectId))
                    .col(
                        timestamp(ProjectLike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_like_user_id")
                            .from(ProjectLike::Table, ProjectLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_like_project_id")
                            .from(ProjectLike::Table, ProjectLike::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_like_unique")
                    .table(ProjectLike::Table)
                    .col(ProjectLike::UserId)
                    .col(ProjectLike::ProjectId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectLike {
    Table,
    Id,
    UserId,
    ProjectId,
    CreatedAt,
}
