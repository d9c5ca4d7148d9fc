use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::{User, UserFavorites};
use crate::error::ArchiveServiceError;
use crate::state::AppState;
use crate::usecase::user::{CreateUserInput, CreateUserUseCase, ListUsersUseCase};

/// Reduced user projection: favorites are flattened to entity names only,
/// and neither `password` nor `is_active` is exposed.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    #[serde(serialize_with = "holocron_core::serde::to_rfc3339_ms")]
    pub created_date: chrono::DateTime<chrono::Utc>,
    pub email: String,
    pub favorite_planets: Vec<String>,
    pub favorite_characters: Vec<String>,
    pub favorite_vehicles: Vec<String>,
}

impl UserResponse {
    pub fn new(user: User, favorites: UserFavorites) -> Self {
        Self {
            id: user.id,
            name: user.name,
            lastname: user.lastname,
            created_date: user.created_date,
            email: user.email,
            favorite_planets: favorites.planets.into_iter().map(|p| p.name).collect(),
            favorite_characters: favorites.characters.into_iter().map(|c| c.name).collect(),
            favorite_vehicles: favorites.vehicles.into_iter().map(|v| v.name).collect(),
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct CreateUserResponse {
    pub msg: String,
    pub user: UserResponse,
}

// Email and password must be present and non-empty; name and lastname
// default to empty strings.
fn validate_create_user(body: CreateUserRequest) -> Result<CreateUserInput, ArchiveServiceError> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(ArchiveServiceError::MissingCredentials);
    }
    Ok(CreateUserInput {
        name: body.name.unwrap_or_default(),
        lastname: body.lastname.unwrap_or_default(),
        email,
        password,
    })
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), ArchiveServiceError> {
    let input = validate_create_user(body)?;

    let uc = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = uc.execute(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            msg: "User created".to_owned(),
            // A brand-new user has no favorites yet.
            user: UserResponse::new(user, UserFavorites::default()),
        }),
    ))
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ArchiveServiceError> {
    let uc = ListUsersUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    let users = uc.execute().await?;
    Ok(Json(
        users
            .into_iter()
            .map(|(user, favorites)| UserResponse::new(user, favorites))
            .collect(),
    ))
}
