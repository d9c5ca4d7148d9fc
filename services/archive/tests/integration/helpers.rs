use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use holocron_archive::domain::repository::{
    CatalogQueryPort, FavoriteRepository, UserRepository,
};
use holocron_archive::domain::types::{
    Character, Climate, FavoriteKind, Gender, NewUser, Planet, User, UserFavorites, Vehicle,
    VehicleType,
};
use holocron_archive::error::ArchiveServiceError;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal user list for post-execution
    /// inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ArchiveServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ArchiveServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, ArchiveServiceError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, user: &NewUser) -> Result<User, ArchiveServiceError> {
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            name: user.name.clone(),
            lastname: user.lastname.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            created_date: user.created_date,
            is_active: user.is_active,
        };
        users.push(user.clone());
        Ok(user)
    }
}

// ── MockCatalog ──────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockCatalog {
    pub planet_ids: Vec<i32>,
    pub character_ids: Vec<i32>,
    pub vehicle_ids: Vec<i32>,
}

impl CatalogQueryPort for MockCatalog {
    async fn has(&self, kind: FavoriteKind, entity_id: i32) -> Result<bool, ArchiveServiceError> {
        let ids = match kind {
            FavoriteKind::Planet => &self.planet_ids,
            FavoriteKind::Character => &self.character_ids,
            FavoriteKind::Vehicle => &self.vehicle_ids,
        };
        Ok(ids.contains(&entity_id))
    }
}

// ── MockFavoriteStore ────────────────────────────────────────────────────────

/// Stateful favorite store: a shared pair set plus the catalog entities
/// needed to resolve pairs back into full objects on `list`.
#[derive(Clone)]
pub struct MockFavoriteStore {
    pub planets: Vec<Planet>,
    pub characters: Vec<Character>,
    pub vehicles: Vec<Vehicle>,
    pub pairs: Arc<Mutex<HashSet<(i32, FavoriteKind, i32)>>>,
}

impl MockFavoriteStore {
    pub fn new(planets: Vec<Planet>, characters: Vec<Character>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            planets,
            characters,
            vehicles,
            pairs: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn pairs_handle(&self) -> Arc<Mutex<HashSet<(i32, FavoriteKind, i32)>>> {
        Arc::clone(&self.pairs)
    }

    /// A catalog probe backed by the same fixture entities.
    pub fn catalog(&self) -> MockCatalog {
        MockCatalog {
            planet_ids: self.planets.iter().map(|p| p.id).collect(),
            character_ids: self.characters.iter().map(|c| c.id).collect(),
            vehicle_ids: self.vehicles.iter().map(|v| v.id).collect(),
        }
    }
}

impl FavoriteRepository for MockFavoriteStore {
    async fn list(&self, user_id: i32) -> Result<UserFavorites, ArchiveServiceError> {
        let pairs = self.pairs.lock().unwrap();
        Ok(UserFavorites {
            planets: self
                .planets
                .iter()
                .filter(|p| pairs.contains(&(user_id, FavoriteKind::Planet, p.id)))
                .cloned()
                .collect(),
            characters: self
                .characters
                .iter()
                .filter(|c| pairs.contains(&(user_id, FavoriteKind::Character, c.id)))
                .cloned()
                .collect(),
            vehicles: self
                .vehicles
                .iter()
                .filter(|v| pairs.contains(&(user_id, FavoriteKind::Vehicle, v.id)))
                .cloned()
                .collect(),
        })
    }

    async fn add(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        entity_id: i32,
    ) -> Result<bool, ArchiveServiceError> {
        // HashSet::insert mirrors ON CONFLICT DO NOTHING: false when present.
        Ok(self.pairs.lock().unwrap().insert((user_id, kind, entity_id)))
    }

    async fn remove(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        entity_id: i32,
    ) -> Result<bool, ArchiveServiceError> {
        Ok(self.pairs.lock().unwrap().remove(&(user_id, kind, entity_id)))
    }
}

// ── Test fixtures ────────────────────────────────────────────────────────────

pub fn test_user(id: i32) -> User {
    User {
        id,
        name: "Luke".to_owned(),
        lastname: "Skywalker".to_owned(),
        email: format!("user{id}@rebellion.example"),
        password: "bluemilk".to_owned(),
        created_date: Utc::now(),
        is_active: true,
    }
}

pub fn tatooine() -> Planet {
    Planet {
        id: 1,
        name: "Tatooine".to_owned(),
        size: 10465,
        climate: Climate::Sunny,
        gravity: true,
    }
}

pub fn luke() -> Character {
    Character {
        id: 1,
        name: "Luke Skywalker".to_owned(),
        age: 23,
        gender: Gender::Male,
    }
}

pub fn landspeeder() -> Vehicle {
    Vehicle {
        id: 1,
        name: "X-34 landspeeder".to_owned(),
        cargo_capacity: 5,
        model: "X-34".to_owned(),
        kind: VehicleType::Car,
    }
}
