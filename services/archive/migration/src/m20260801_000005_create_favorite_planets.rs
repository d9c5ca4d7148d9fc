use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritePlanets::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FavoritePlanets::PlanetId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(FavoritePlanets::UserId)
                            .col(FavoritePlanets::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoritePlanets::Table, FavoritePlanets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoritePlanets::Table, FavoritePlanets::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FavoritePlanets {
    Table,
    UserId,
    PlanetId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
}
