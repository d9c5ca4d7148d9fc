use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};

use holocron_archive_schema::{
    characters, favorite_characters, favorite_planets, favorite_vehicles, planets, users, vehicles,
};

use crate::domain::repository::{
    CatalogQueryPort, CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository,
    VehicleRepository,
};
use crate::domain::types::{
    Character, Climate, FavoriteKind, Gender, NewCharacter, NewPlanet, NewUser, NewVehicle, Planet,
    User, UserFavorites, Vehicle, VehicleType,
};
use crate::error::ArchiveServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ArchiveServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ArchiveServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, ArchiveServiceError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &NewUser) -> Result<User, ArchiveServiceError> {
        let model = users::ActiveModel {
            name: Set(user.name.clone()),
            lastname: Set(user.lastname.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            created_date: Set(user.created_date),
            is_active: Set(user.is_active),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        lastname: model.lastname,
        email: model.email,
        password: model.password,
        created_date: model.created_date,
        is_active: model.is_active,
    }
}

// ── Planet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanetRepository {
    pub db: DatabaseConnection,
}

impl PlanetRepository for DbPlanetRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ArchiveServiceError> {
        let model = planets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet by id")?;
        model.map(planet_from_model).transpose()
    }

    async fn list(&self) -> Result<Vec<Planet>, ArchiveServiceError> {
        let models = planets::Entity::find()
            .all(&self.db)
            .await
            .context("list planets")?;
        models.into_iter().map(planet_from_model).collect()
    }

    async fn create(&self, planet: &NewPlanet) -> Result<Planet, ArchiveServiceError> {
        let model = planets::ActiveModel {
            name: Set(planet.name.clone()),
            size: Set(planet.size),
            climate: Set(planet.climate.as_str().to_owned()),
            gravity: Set(planet.gravity),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create planet")?;
        planet_from_model(model)
    }
}

// Stored enum columns hold the symbolic name; a value that no longer parses
// means schema drift, surfaced as an internal error.
fn planet_from_model(model: planets::Model) -> Result<Planet, ArchiveServiceError> {
    let climate = Climate::parse(&model.climate)
        .ok_or_else(|| anyhow::anyhow!("unknown climate {:?} in planets row {}", model.climate, model.id))?;
    Ok(Planet {
        id: model.id,
        name: model.name,
        size: model.size,
        climate,
        gravity: model.gravity,
    })
}

// ── Character repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCharacterRepository {
    pub db: DatabaseConnection,
}

impl CharacterRepository for DbCharacterRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ArchiveServiceError> {
        let model = characters::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find character by id")?;
        model.map(character_from_model).transpose()
    }

    async fn list(&self) -> Result<Vec<Character>, ArchiveServiceError> {
        let models = characters::Entity::find()
            .all(&self.db)
            .await
            .context("list characters")?;
        models.into_iter().map(character_from_model).collect()
    }

    async fn create(&self, character: &NewCharacter) -> Result<Character, ArchiveServiceError> {
        let model = characters::ActiveModel {
            name: Set(character.name.clone()),
            age: Set(character.age),
            gender: Set(character.gender.as_str().to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create character")?;
        character_from_model(model)
    }
}

fn character_from_model(model: characters::Model) -> Result<Character, ArchiveServiceError> {
    let gender = Gender::parse(&model.gender).ok_or_else(|| {
        anyhow::anyhow!("unknown gender {:?} in characters row {}", model.gender, model.id)
    })?;
    Ok(Character {
        id: model.id,
        name: model.name,
        age: model.age,
        gender,
    })
}

// ── Vehicle repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVehicleRepository {
    pub db: DatabaseConnection,
}

impl VehicleRepository for DbVehicleRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, ArchiveServiceError> {
        let model = vehicles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find vehicle by id")?;
        model.map(vehicle_from_model).transpose()
    }

    async fn list(&self) -> Result<Vec<Vehicle>, ArchiveServiceError> {
        let models = vehicles::Entity::find()
            .all(&self.db)
            .await
            .context("list vehicles")?;
        models.into_iter().map(vehicle_from_model).collect()
    }

    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, ArchiveServiceError> {
        let model = vehicles::ActiveModel {
            name: Set(vehicle.name.clone()),
            cargo_capacity: Set(vehicle.cargo_capacity),
            model: Set(vehicle.model.clone()),
            kind: Set(vehicle.kind.as_str().to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create vehicle")?;
        vehicle_from_model(model)
    }
}

fn vehicle_from_model(model: vehicles::Model) -> Result<Vehicle, ArchiveServiceError> {
    let kind = VehicleType::parse(&model.kind).ok_or_else(|| {
        anyhow::anyhow!("unknown type {:?} in vehicles row {}", model.kind, model.id)
    })?;
    Ok(Vehicle {
        id: model.id,
        name: model.name,
        cargo_capacity: model.cargo_capacity,
        model: model.model,
        kind,
    })
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn list(&self, user_id: i32) -> Result<UserFavorites, ArchiveServiceError> {
        let planet_ids: Vec<i32> = favorite_planets::Entity::find()
            .filter(favorite_planets::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .context("list favorite planet pairs")?
            .into_iter()
            .map(|pair| pair.planet_id)
            .collect();
        let planets = planets::Entity::find()
            .filter(planets::Column::Id.is_in(planet_ids))
            .all(&self.db)
            .await
            .context("load favorite planets")?
            .into_iter()
            .map(planet_from_model)
            .collect::<Result<Vec<_>, _>>()?;

        let character_ids: Vec<i32> = favorite_characters::Entity::find()
            .filter(favorite_characters::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .context("list favorite character pairs")?
            .into_iter()
            .map(|pair| pair.character_id)
            .collect();
        let characters = characters::Entity::find()
            .filter(characters::Column::Id.is_in(character_ids))
            .all(&self.db)
            .await
            .context("load favorite characters")?
            .into_iter()
            .map(character_from_model)
            .collect::<Result<Vec<_>, _>>()?;

        let vehicle_ids: Vec<i32> = favorite_vehicles::Entity::find()
            .filter(favorite_vehicles::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .context("list favorite vehicle pairs")?
            .into_iter()
            .map(|pair| pair.vehicle_id)
            .collect();
        let vehicles = vehicles::Entity::find()
            .filter(vehicles::Column::Id.is_in(vehicle_ids))
            .all(&self.db)
            .await
            .context("load favorite vehicles")?
            .into_iter()
            .map(vehicle_from_model)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UserFavorites {
            planets,
            characters,
            vehicles,
        })
    }

    // Duplicate pairs are rejected by the composite primary key; DO NOTHING
    // plus the affected-row count makes the check-then-write atomic.
    async fn add(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        entity_id: i32,
    ) -> Result<bool, ArchiveServiceError> {
        let rows = match kind {
            FavoriteKind::Planet => favorite_planets::Entity::insert(favorite_planets::ActiveModel {
                user_id: Set(user_id),
                planet_id: Set(entity_id),
            })
            .on_conflict(
                OnConflict::columns([
                    favorite_planets::Column::UserId,
                    favorite_planets::Column::PlanetId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert favorite planet pair")?,
            FavoriteKind::Character => {
                favorite_characters::Entity::insert(favorite_characters::ActiveModel {
                    user_id: Set(user_id),
                    character_id: Set(entity_id),
                })
                .on_conflict(
                    OnConflict::columns([
                        favorite_characters::Column::UserId,
                        favorite_characters::Column::CharacterId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&self.db)
                .await
                .context("insert favorite character pair")?
            }
            FavoriteKind::Vehicle => {
                favorite_vehicles::Entity::insert(favorite_vehicles::ActiveModel {
                    user_id: Set(user_id),
                    vehicle_id: Set(entity_id),
                })
                .on_conflict(
                    OnConflict::columns([
                        favorite_vehicles::Column::UserId,
                        favorite_vehicles::Column::VehicleId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&self.db)
                .await
                .context("insert favorite vehicle pair")?
            }
        };
        Ok(rows > 0)
    }

    async fn remove(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        entity_id: i32,
    ) -> Result<bool, ArchiveServiceError> {
        let result = match kind {
            FavoriteKind::Planet => favorite_planets::Entity::delete_many()
                .filter(favorite_planets::Column::UserId.eq(user_id))
                .filter(favorite_planets::Column::PlanetId.eq(entity_id))
                .exec(&self.db)
                .await
                .context("delete favorite planet pair")?,
            FavoriteKind::Character => favorite_characters::Entity::delete_many()
                .filter(favorite_characters::Column::UserId.eq(user_id))
                .filter(favorite_characters::Column::CharacterId.eq(entity_id))
                .exec(&self.db)
                .await
                .context("delete favorite character pair")?,
            FavoriteKind::Vehicle => favorite_vehicles::Entity::delete_many()
                .filter(favorite_vehicles::Column::UserId.eq(user_id))
                .filter(favorite_vehicles::Column::VehicleId.eq(entity_id))
                .exec(&self.db)
                .await
                .context("delete favorite vehicle pair")?,
        };
        Ok(result.rows_affected > 0)
    }
}

// ── Catalog existence probe ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCatalogQueryPort {
    pub db: DatabaseConnection,
}

impl CatalogQueryPort for DbCatalogQueryPort {
    async fn has(&self, kind: FavoriteKind, entity_id: i32) -> Result<bool, ArchiveServiceError> {
        let found = match kind {
            FavoriteKind::Planet => planets::Entity::find_by_id(entity_id)
                .one(&self.db)
                .await
                .context("probe planet")?
                .is_some(),
            FavoriteKind::Character => characters::Entity::find_by_id(entity_id)
                .one(&self.db)
                .await
                .context("probe character")?
                .is_some(),
            FavoriteKind::Vehicle => vehicles::Entity::find_by_id(entity_id)
                .one(&self.db)
                .await
                .context("probe vehicle")?
                .is_some(),
        };
        Ok(found)
    }
}
