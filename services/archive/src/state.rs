use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCatalogQueryPort, DbCharacterRepository, DbFavoriteRepository, DbPlanetRepository,
    DbUserRepository, DbVehicleRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn planet_repo(&self) -> DbPlanetRepository {
        DbPlanetRepository {
            db: self.db.clone(),
        }
    }

    pub fn character_repo(&self) -> DbCharacterRepository {
        DbCharacterRepository {
            db: self.db.clone(),
        }
    }

    pub fn vehicle_repo(&self) -> DbVehicleRepository {
        DbVehicleRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }

    pub fn catalog(&self) -> DbCatalogQueryPort {
        DbCatalogQueryPort {
            db: self.db.clone(),
        }
    }
}
