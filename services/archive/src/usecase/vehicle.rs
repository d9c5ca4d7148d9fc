use crate::domain::repository::VehicleRepository;
use crate::domain::types::{NewVehicle, Vehicle, VehicleType};
use crate::error::ArchiveServiceError;

// No route exposes vehicle creation; vehicles enter through this store seam.

// ── CreateVehicle ────────────────────────────────────────────────────────────

pub struct CreateVehicleInput {
    pub name: String,
    pub cargo_capacity: i32,
    pub model: String,
    pub kind: VehicleType,
}

pub struct CreateVehicleUseCase<R: VehicleRepository> {
    pub repo: R,
}

impl<R: VehicleRepository> CreateVehicleUseCase<R> {
    pub async fn execute(&self, input: CreateVehicleInput) -> Result<Vehicle, ArchiveServiceError> {
        self.repo
            .create(&NewVehicle {
                name: input.name,
                cargo_capacity: input.cargo_capacity,
                model: input.model,
                kind: input.kind,
            })
            .await
    }
}

// ── GetVehicle ───────────────────────────────────────────────────────────────

pub struct GetVehicleUseCase<R: VehicleRepository> {
    pub repo: R,
}

impl<R: VehicleRepository> GetVehicleUseCase<R> {
    pub async fn execute(&self, vehicle_id: i32) -> Result<Vehicle, ArchiveServiceError> {
        self.repo
            .find_by_id(vehicle_id)
            .await?
            .ok_or(ArchiveServiceError::VehicleNotFound)
    }
}

// ── ListVehicles ─────────────────────────────────────────────────────────────

pub struct ListVehiclesUseCase<R: VehicleRepository> {
    pub repo: R,
}

impl<R: VehicleRepository> ListVehiclesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Vehicle>, ArchiveServiceError> {
        self.repo.list().await
    }
}
