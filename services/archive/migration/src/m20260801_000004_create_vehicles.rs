use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Vehicles::CargoCapacity)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vehicles::Model).string().not_null())
                    .col(ColumnDef::new(Vehicles::Type).string_len(20).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vehicles {
    Table,
    Id,
    Name,
    CargoCapacity,
    Model,
    Type,
}
