use crate::domain::repository::CharacterRepository;
use crate::domain::types::{Character, Gender, NewCharacter};
use crate::error::ArchiveServiceError;

// ── CreateCharacter ──────────────────────────────────────────────────────────

pub struct CreateCharacterInput {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
}

pub struct CreateCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> CreateCharacterUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateCharacterInput,
    ) -> Result<Character, ArchiveServiceError> {
        self.repo
            .create(&NewCharacter {
                name: input.name,
                age: input.age,
                gender: input.gender,
            })
            .await
    }
}

// ── GetCharacter ─────────────────────────────────────────────────────────────

pub struct GetCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> GetCharacterUseCase<R> {
    pub async fn execute(&self, character_id: i32) -> Result<Character, ArchiveServiceError> {
        self.repo
            .find_by_id(character_id)
            .await?
            .ok_or(ArchiveServiceError::CharacterNotFound)
    }
}

// ── ListCharacters ───────────────────────────────────────────────────────────

pub struct ListCharactersUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> ListCharactersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Character>, ArchiveServiceError> {
        self.repo.list().await
    }
}
