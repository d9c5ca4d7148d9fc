use crate::domain::repository::{CatalogQueryPort, FavoriteRepository, UserRepository};
use crate::domain::types::{FavoriteKind, UserFavorites};
use crate::error::ArchiveServiceError;

// ── GetUserFavorites ─────────────────────────────────────────────────────────

pub struct GetUserFavoritesUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> GetUserFavoritesUseCase<U, F> {
    pub async fn execute(&self, user_id: i32) -> Result<UserFavorites, ArchiveServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ArchiveServiceError::UserNotFound);
        }
        self.favorites.list(user_id).await
    }
}

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<U: UserRepository, C: CatalogQueryPort, F: FavoriteRepository> {
    pub users: U,
    pub catalog: C,
    pub favorites: F,
}

impl<U: UserRepository, C: CatalogQueryPort, F: FavoriteRepository> AddFavoriteUseCase<U, C, F> {
    pub async fn execute(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        entity_id: i32,
    ) -> Result<(), ArchiveServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ArchiveServiceError::UserNotFound);
        }
        if !self.catalog.has(kind, entity_id).await? {
            return Err(ArchiveServiceError::entity_not_found(kind));
        }
        let inserted = self.favorites.add(user_id, kind, entity_id).await?;
        if !inserted {
            return Err(ArchiveServiceError::AlreadyFavorited(kind));
        }
        Ok(())
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<U: UserRepository, C: CatalogQueryPort, F: FavoriteRepository> {
    pub users: U,
    pub catalog: C,
    pub favorites: F,
}

impl<U: UserRepository, C: CatalogQueryPort, F: FavoriteRepository>
    RemoveFavoriteUseCase<U, C, F>
{
    pub async fn execute(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        entity_id: i32,
    ) -> Result<(), ArchiveServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ArchiveServiceError::UserNotFound);
        }
        if !self.catalog.has(kind, entity_id).await? {
            return Err(ArchiveServiceError::entity_not_found(kind));
        }
        let removed = self.favorites.remove(user_id, kind, entity_id).await?;
        if !removed {
            return Err(ArchiveServiceError::FavoriteNotFound(kind));
        }
        Ok(())
    }
}
