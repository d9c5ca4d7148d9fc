use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Characters::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Characters::Age).integer().not_null())
                    .col(
                        ColumnDef::new(Characters::Gender)
                            .string_len(20)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
    Name,
    Age,
    Gender,
}
