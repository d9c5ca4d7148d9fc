use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users;
mod m20260801_000002_create_planets;
mod m20260801_000003_create_characters;
mod m20260801_000004_create_vehicles;
mod m20260801_000005_create_favorite_planets;
mod m20260801_000006_create_favorite_characters;
mod m20260801_000007_create_favorite_vehicles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users::Migration),
            Box::new(m20260801_000002_create_planets::Migration),
            Box::new(m20260801_000003_create_characters::Migration),
            Box::new(m20260801_000004_create_vehicles::Migration),
            Box::new(m20260801_000005_create_favorite_planets::Migration),
            Box::new(m20260801_000006_create_favorite_characters::Migration),
            Box::new(m20260801_000007_create_favorite_vehicles::Migration),
        ]
    }
}
