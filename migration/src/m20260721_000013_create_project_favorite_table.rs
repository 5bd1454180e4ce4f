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
                    .table(ProjectFavorite::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectFavorite::Id))
                    .col(integer(ProjectFavorite::UserId))
                    .col(integer(ProjectFavorite::ProjectId))
                    .col(
                        timestamp(ProjectFavorite::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_favorite_user_id")
                            .from(ProjectFavorite::Table, ProjectFavorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_favorite_project_id")
                            .from(ProjectFavorite::Table, ProjectFavorite::ProjectId)
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
                    .name("idx_project_favorite_unique")
                    .table(ProjectFavorite::Table)
                    .col(ProjectFavorite::UserId)
                    .col(ProjectFavorite::ProjectId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectFavorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectFavorite {
    Table,
    Id,
    UserId,
    ProjectId,
    CreatedAt,
}
