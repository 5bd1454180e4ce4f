use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260720_000005_create_project_table::Project, m20260721_000010_create_award_table::Award,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectAward::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectAward::Id))
                    .col(integer(ProjectAward::AwardId))
                    .col(integer(ProjectAward::ProjectId))
                    .col(
                        timestamp(ProjectAward::GrantedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_award_award_id")
                            .from(ProjectAward::Table, ProjectAward::AwardId)
                            .to(Award::Table, Award::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_award_project_id")
                            .from(ProjectAward::Table, ProjectAward::ProjectId)
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
                    .name("idx_project_award_unique")
                    .table(ProjectAward::Table)
                    .col(ProjectAward::AwardId)
                    .col(ProjectAward::ProjectId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectAward::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectAward {
    Table,
    Id,
    AwardId,
    ProjectId,
    GrantedAt,
}
