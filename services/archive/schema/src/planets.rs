use sea_orm::entity::prelude::*;

/// Planet record. `climate` holds the symbolic enum name (e.g. "SUNNY").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub size: i32,
    pub climate: String,
    pub gravity: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planets::Entity")]
    FavoritePlanets,
}

impl Related<super::favorite_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
