use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Semester::Table)
                    .if_not_exists()
                    .col(pk_auto(Semester::Id))
                    .col(string_uniq(Semester::Name))
                    .col(date_null(Semester::StartsOn))
                    .col(date_null(Semester::EndsOn))
                    .col(
                        timestamp(Semester::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Semester::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Semester {
    Table,
    Id,
    Name,
    StartsOn,
    EndsOn,
    CreatedAt,
}
