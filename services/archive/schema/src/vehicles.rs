use sea_orm::entity::prelude::*;

/// Vehicle record. `kind` maps to the `type` column and holds the
/// symbolic enum name (e.g. "CAR").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub cargo_capacity: i32,
    pub model: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_vehicles::Entity")]
    FavoriteVehicles,
}

impl Related<super::favorite_vehicles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteVehicles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
