use sea_orm::entity::prelude::*;

/// Character record. `gender` holds the symbolic enum name (e.g. "MALE").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_characters::Entity")]
    FavoriteCharacters,
}

impl Related<super::favorite_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
