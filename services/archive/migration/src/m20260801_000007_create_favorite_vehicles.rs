use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteVehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoriteVehicles::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FavoriteVehicles::VehicleId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(FavoriteVehicles::UserId)
                            .col(FavoriteVehicles::VehicleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoriteVehicles::Table, FavoriteVehicles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoriteVehicles::Table, FavoriteVehicles::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteVehicles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FavoriteVehicles {
    Table,
    UserId,
    VehicleId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Vehicles {
    Table,
    Id,
}
