use sea_orm::entity::prelude::*;

/// Registered user record.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub lastname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub created_date: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planets::Entity")]
    FavoritePlanets,
    #[sea_orm(has_many = "super::favorite_characters::Entity")]
    FavoriteCharacters,
    #[sea_orm(has_many = "super::favorite_vehicles::Entity")]
    FavoriteVehicles,
}

impl Related<super::favorite_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanets.def()
    }
}

impl Related<super::favorite_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacters.def()
    }
}

impl Related<super::favorite_vehicles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteVehicles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
