use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Award::Table)
                    .if_not_exists()
                    .col(pk_auto(Award::Id))
                    .col(string(Award::Name))
                    .col(text_null(Award::Description))
                    .col(string_null(Award::BadgePath))
                    .col(
                        timestamp(Award::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Award::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Award {
    Table,
    Id,
    Name,
    Description,
    BadgePath,
    CreatedAt,
}
