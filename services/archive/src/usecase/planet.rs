use crate::domain::repository::PlanetRepository;
use crate::domain::types::{Climate, NewPlanet, Planet};
use crate::error::ArchiveServiceError;

// ── CreatePlanet ─────────────────────────────────────────────────────────────

pub struct CreatePlanetInput {
    pub name: String,
    pub size: i32,
    pub climate: Climate,
    pub gravity: bool,
}

pub struct CreatePlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> CreatePlanetUseCase<R> {
    pub async fn execute(&self, input: CreatePlanetInput) -> Result<Planet, ArchiveServiceError> {
        self.repo
            .create(&NewPlanet {
                name: input.name,
                size: input.size,
                climate: input.climate,
                gravity: input.gravity,
            })
            .await
    }
}

// ── GetPlanet ────────────────────────────────────────────────────────────────

pub struct GetPlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetUseCase<R> {
    pub async fn execute(&self, planet_id: i32) -> Result<Planet, ArchiveServiceError> {
        self.repo
            .find_by_id(planet_id)
            .await?
            .ok_or(ArchiveServiceError::PlanetNotFound)
    }
}

// ── ListPlanets ──────────────────────────────────────────────────────────────

pub struct ListPlanetsUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> ListPlanetsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Planet>, ArchiveServiceError> {
        self.repo.list().await
    }
}
