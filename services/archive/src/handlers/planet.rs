use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Climate, Planet};
use crate::error::ArchiveServiceError;
use crate::state::AppState;
use crate::usecase::planet::{
    CreatePlanetInput, CreatePlanetUseCase, GetPlanetUseCase, ListPlanetsUseCase,
};

#[derive(Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub size: i32,
    pub climate: &'static str,
    pub gravity: bool,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            size: planet.size,
            climate: planet.climate.as_str(),
            gravity: planet.gravity,
        }
    }
}

// ── POST /planets ────────────────────────────────────────────────────────────

// Fields are optional so absence maps to 400 rather than a deserialize reject.
#[derive(Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub size: Option<i32>,
    pub climate: Option<String>,
    pub gravity: Option<bool>,
}

fn validate_create_planet(
    body: CreatePlanetRequest,
) -> Result<CreatePlanetInput, ArchiveServiceError> {
    let (Some(name), Some(size), Some(climate), Some(gravity)) =
        (body.name, body.size, body.climate, body.gravity)
    else {
        return Err(ArchiveServiceError::MissingFields);
    };
    let climate = Climate::parse(&climate).ok_or(ArchiveServiceError::InvalidClimate)?;
    Ok(CreatePlanetInput {
        name,
        size,
        climate,
        gravity,
    })
}

pub async fn create_planet(
    State(state): State<AppState>,
    Json(body): Json<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<PlanetResponse>), ArchiveServiceError> {
    let input = validate_create_planet(body)?;

    let uc = CreatePlanetUseCase {
        repo: state.planet_repo(),
    };
    let planet = uc.execute(input).await?;
    Ok((StatusCode::CREATED, Json(planet.into())))
}

// ── GET /planets ─────────────────────────────────────────────────────────────

pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ArchiveServiceError> {
    let uc = ListPlanetsUseCase {
        repo: state.planet_repo(),
    };
    let planets = uc.execute().await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

// ── GET /planets/{planet_id} ─────────────────────────────────────────────────

pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<Json<PlanetResponse>, ArchiveServiceError> {
    let uc = GetPlanetUseCase {
        repo: state.planet_repo(),
    };
    let planet = uc.execute(planet_id).await?;
    Ok(Json(planet.into()))
}
