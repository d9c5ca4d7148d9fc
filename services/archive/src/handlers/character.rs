use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Character, Gender};
use crate::error::ArchiveServiceError;
use crate::state::AppState;
use crate::usecase::character::{
    CreateCharacterInput, CreateCharacterUseCase, GetCharacterUseCase, ListCharactersUseCase,
};

#[derive(Serialize)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: &'static str,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
            age: character.age,
            gender: character.gender.as_str(),
        }
    }
}

// ── POST /people ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCharacterRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

fn validate_create_character(
    body: CreateCharacterRequest,
) -> Result<CreateCharacterInput, ArchiveServiceError> {
    let (Some(name), Some(age), Some(gender)) = (body.name, body.age, body.gender) else {
        return Err(ArchiveServiceError::MissingFields);
    };
    let gender = Gender::parse(&gender).ok_or(ArchiveServiceError::InvalidGender)?;
    Ok(CreateCharacterInput { name, age, gender })
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(body): Json<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<CharacterResponse>), ArchiveServiceError> {
    let input = validate_create_character(body)?;

    let uc = CreateCharacterUseCase {
        repo: state.character_repo(),
    };
    let character = uc.execute(input).await?;
    Ok((StatusCode::CREATED, Json(character.into())))
}

// ── GET /people ──────────────────────────────────────────────────────────────

pub async fn get_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterResponse>>, ArchiveServiceError> {
    let uc = ListCharactersUseCase {
        repo: state.character_repo(),
    };
    let characters = uc.execute().await?;
    Ok(Json(
        characters.into_iter().map(CharacterResponse::from).collect(),
    ))
}

// ── GET /people/{people_id} ──────────────────────────────────────────────────

pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<Json<CharacterResponse>, ArchiveServiceError> {
    let uc = GetCharacterUseCase {
        repo: state.character_repo(),
    };
    let character = uc.execute(people_id).await?;
    Ok(Json(character.into()))
}
