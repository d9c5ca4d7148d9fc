use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::domain::types::{FavoriteKind, UserFavorites, Vehicle};
use crate::error::ArchiveServiceError;
use crate::handlers::character::CharacterResponse;
use crate::handlers::planet::PlanetResponse;
use crate::state::AppState;
use crate::usecase::favorite::{
    AddFavoriteUseCase, GetUserFavoritesUseCase, RemoveFavoriteUseCase,
};

#[derive(Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

#[derive(Serialize)]
pub struct VehicleResponse {
    pub id: i32,
    pub name: String,
    pub cargo_capacity: i32,
    pub model: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            cargo_capacity: vehicle.cargo_capacity,
            model: vehicle.model,
            kind: vehicle.kind.as_str(),
        }
    }
}

/// Full favorites projection: complete serialized entities, unlike the
/// name-only lists embedded in the user projection.
#[derive(Serialize)]
pub struct UserFavoritesResponse {
    pub favorite_planets: Vec<PlanetResponse>,
    pub favorite_characters: Vec<CharacterResponse>,
    pub favorite_vehicles: Vec<VehicleResponse>,
}

impl From<UserFavorites> for UserFavoritesResponse {
    fn from(favorites: UserFavorites) -> Self {
        Self {
            favorite_planets: favorites.planets.into_iter().map(Into::into).collect(),
            favorite_characters: favorites.characters.into_iter().map(Into::into).collect(),
            favorite_vehicles: favorites.vehicles.into_iter().map(Into::into).collect(),
        }
    }
}

// ── GET /users/{user_id}/favorites ───────────────────────────────────────────

pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserFavoritesResponse>, ArchiveServiceError> {
    let uc = GetUserFavoritesUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    let favorites = uc.execute(user_id).await?;
    Ok(Json(favorites.into()))
}

// ── POST /favorite/{kind}/{user_id}/{entity_id} ──────────────────────────────

async fn add_favorite(
    state: AppState,
    user_id: i32,
    kind: FavoriteKind,
    entity_id: i32,
) -> Result<Json<MessageResponse>, ArchiveServiceError> {
    let uc = AddFavoriteUseCase {
        users: state.user_repo(),
        catalog: state.catalog(),
        favorites: state.favorite_repo(),
    };
    uc.execute(user_id, kind, entity_id).await?;
    Ok(Json(MessageResponse {
        msg: format!("{kind} (id={entity_id}) added to user (id={user_id}) favorites"),
    }))
}

pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<Json<MessageResponse>, ArchiveServiceError> {
    add_favorite(state, user_id, FavoriteKind::Planet, planet_id).await
}

pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> Result<Json<MessageResponse>, ArchiveServiceError> {
    add_favorite(state, user_id, FavoriteKind::Character, people_id).await
}

// ── DELETE /favorite/{kind}/{user_id}/{entity_id} ────────────────────────────

async fn remove_favorite(
    state: AppState,
    user_id: i32,
    kind: FavoriteKind,
    entity_id: i32,
) -> Result<Json<MessageResponse>, ArchiveServiceError> {
    let uc = RemoveFavoriteUseCase {
        users: state.user_repo(),
        catalog: state.catalog(),
        favorites: state.favorite_repo(),
    };
    uc.execute(user_id, kind, entity_id).await?;
    Ok(Json(MessageResponse {
        msg: format!("{kind} (id={entity_id}) removed from user (id={user_id}) favorites"),
    }))
}

pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<Json<MessageResponse>, ArchiveServiceError> {
    remove_favorite(state, user_id, FavoriteKind::Planet, planet_id).await
}

pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> Result<Json<MessageResponse>, ArchiveServiceError> {
    remove_favorite(state, user_id, FavoriteKind::Character, people_id).await
}
