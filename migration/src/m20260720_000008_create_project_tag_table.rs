use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260720_000005_create_project_table::Project, m20260720_000007_create_tag_table::Tag,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectTag::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectTag::Id))
                    .col(integer(ProjectTag::ProjectId))
                    .col(integer(ProjectTag::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tag_project_id")
                            .from(ProjectTag::Table, ProjectTag::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tag_tag_id")
                            .from(ProjectTag::Table, ProjectTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_tag_unique")
                    .table(ProjectTag::Table)
                    .col(ProjectTag::ProjectId)
                    .col(ProjectTag::TagId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectTag {
    Table,
    Id,
    ProjectId,
    TagId,
}
