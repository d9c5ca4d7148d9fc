use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::types::FavoriteKind;

/// Archive service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveServiceError {
    #[error("missing fields")]
    MissingFields,
    #[error("email and password are required")]
    MissingCredentials,
    #[error("invalid climate type")]
    InvalidClimate,
    #[error("invalid gender type")]
    InvalidGender,
    #[error("planet not found")]
    PlanetNotFound,
    #[error("character not found")]
    CharacterNotFound,
    #[error("vehicle not found")]
    VehicleNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("{0} not in favorites")]
    FavoriteNotFound(FavoriteKind),
    #[error("{0} already in favorites")]
    AlreadyFavorited(FavoriteKind),
    #[error("email already registered")]
    EmailAlreadyExists,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ArchiveServiceError {
    /// The entity-missing variant for a favorite kind.
    pub fn entity_not_found(kind: FavoriteKind) -> Self {
        match kind {
            FavoriteKind::Planet => Self::PlanetNotFound,
            FavoriteKind::Character => Self::CharacterNotFound,
            FavoriteKind::Vehicle => Self::VehicleNotFound,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields => "MISSING_FIELDS",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidClimate => "INVALID_CLIMATE",
            Self::InvalidGender => "INVALID_GENDER",
            Self::PlanetNotFound => "PLANET_NOT_FOUND",
            Self::CharacterNotFound => "CHARACTER_NOT_FOUND",
            Self::VehicleNotFound => "VEHICLE_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::FavoriteNotFound(_) => "FAVORITE_NOT_FOUND",
            Self::AlreadyFavorited(_) => "FAVORITE_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ArchiveServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::PlanetNotFound
            | Self::CharacterNotFound
            | Self::VehicleNotFound
            | Self::UserNotFound
            | Self::FavoriteNotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate favorites and duplicate emails surface as 400, not 409.
            Self::MissingFields
            | Self::MissingCredentials
            | Self::InvalidClimate
            | Self::InvalidGender
            | Self::AlreadyFavorited(_)
            | Self::EmailAlreadyExists => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
