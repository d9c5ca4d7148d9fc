#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Character, FavoriteKind, NewCharacter, NewPlanet, NewUser, NewVehicle, Planet, User,
    UserFavorites, Vehicle,
};
use crate::error::ArchiveServiceError;

/// Repository for user records.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ArchiveServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ArchiveServiceError>;
    async fn list(&self) -> Result<Vec<User>, ArchiveServiceError>;
    /// Persist a new user and return it with its generated id.
    async fn create(&self, user: &NewUser) -> Result<User, ArchiveServiceError>;
}

/// Repository for planet records.
pub trait PlanetRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ArchiveServiceError>;
    async fn list(&self) -> Result<Vec<Planet>, ArchiveServiceError>;
    async fn create(&self, planet: &NewPlanet) -> Result<Planet, ArchiveServiceError>;
}

/// Repository for character records.
pub trait CharacterRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ArchiveServiceError>;
    async fn list(&self) -> Result<Vec<Character>, ArchiveServiceError>;
    async fn create(&self, character: &NewCharacter) -> Result<Character, ArchiveServiceError>;
}

/// Repository for vehicle records. No route exposes `create` yet; it is
/// part of the store contract so vehicles can be seeded through the
/// store API.
pub trait VehicleRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, ArchiveServiceError>;
    async fn list(&self) -> Result<Vec<Vehicle>, ArchiveServiceError>;
    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, ArchiveServiceError>;
}

/// Single favorite-association capability, parameterized by entity kind.
pub trait FavoriteRepository: Send + Sync {
    /// All favorites of a user across the three kinds, as full entities.
    async fn list(&self, user_id: i32) -> Result<UserFavorites, ArchiveServiceError>;

    /// Insert a favorite pair. Returns `false` when the pair already
    /// exists (detected atomically, not by a pre-read).
    async fn add(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        entity_id: i32,
    ) -> Result<bool, ArchiveServiceError>;

    /// Delete a favorite pair. Returns `true` if a row was deleted.
    async fn remove(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        entity_id: i32,
    ) -> Result<bool, ArchiveServiceError>;
}

/// Existence probe for catalog entities, used before touching a join table.
pub trait CatalogQueryPort: Send + Sync {
    async fn has(&self, kind: FavoriteKind, entity_id: i32) -> Result<bool, ArchiveServiceError>;
}
