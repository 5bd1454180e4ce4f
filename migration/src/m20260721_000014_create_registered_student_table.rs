use sea_orm_migration::{prelude::*, schema::*};

use super::m20260720_000001_create_semester_table::Semester;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegisteredStudent::Table)
                    .if_not_exists()
                    .col(pk_auto(RegisteredStudent::Id))
                    .col(string_uniq(RegisteredStudent::Email))
                    .col(string(RegisteredStudent::Name))
                    .col(integer(RegisteredStudent::SemesterId))
                    .col(
                        timestamp(RegisteredStudent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registered_student_semester_id")
                            .from(RegisteredStudent::Table, RegisteredStudent::SemesterId)
                            .to(Semester::Table, Semester::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegisteredStudent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RegisteredStudent {
    Table,
    Id,
    Email,
    Name,
    SemesterId,
    CreatedAt,
}
