use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoriteCharacters::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FavoriteCharacters::CharacterId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(FavoriteCharacters::UserId)
                            .col(FavoriteCharacters::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoriteCharacters::Table, FavoriteCharacters::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoriteCharacters::Table, FavoriteCharacters::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FavoriteCharacters {
    Table,
    UserId,
    CharacterId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
}
