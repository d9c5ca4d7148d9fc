use chrono::Utc;

use crate::domain::repository::{FavoriteRepository, UserRepository};
use crate::domain::types::{NewUser, User, UserFavorites};
use crate::error::ArchiveServiceError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, ArchiveServiceError> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ArchiveServiceError::EmailAlreadyExists);
        }
        self.repo
            .create(&NewUser {
                name: input.name,
                lastname: input.lastname,
                email: input.email,
                password: input.password,
                created_date: Utc::now(),
                is_active: true,
            })
            .await
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

/// Lists every user joined with their favorites, so callers can build the
/// reduced name-only projection.
pub struct ListUsersUseCase<R: UserRepository, F: FavoriteRepository> {
    pub users: R,
    pub favorites: F,
}

impl<R: UserRepository, F: FavoriteRepository> ListUsersUseCase<R, F> {
    pub async fn execute(&self) -> Result<Vec<(User, UserFavorites)>, ArchiveServiceError> {
        let users = self.users.list().await?;
        let mut result = Vec::with_capacity(users.len());
        for user in users {
            let favorites = self.favorites.list(user.id).await?;
            result.push((user, favorites));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::FavoriteKind;

    struct MockUserRepo {
        users: Vec<User>,
    }

    impl UserRepository for MockUserRepo {
        async fn find_by_id(&self, id: i32) -> Result<Option<User>, ArchiveServiceError> {
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, ArchiveServiceError> {
            Ok(self.users.iter().find(|u| u.email == email).cloned())
        }

        async fn list(&self) -> Result<Vec<User>, ArchiveServiceError> {
            Ok(self.users.clone())
        }

        async fn create(&self, user: &NewUser) -> Result<User, ArchiveServiceError> {
            let id = self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
            Ok(User {
                id,
                name: user.name.clone(),
                lastname: user.lastname.clone(),
                email: user.email.clone(),
                password: user.password.clone(),
                created_date: user.created_date,
                is_active: user.is_active,
            })
        }
    }

    struct MockFavoriteRepo;

    impl FavoriteRepository for MockFavoriteRepo {
        async fn list(&self, _user_id: i32) -> Result<UserFavorites, ArchiveServiceError> {
            Ok(UserFavorites::default())
        }

        async fn add(
            &self,
            _user_id: i32,
            _kind: FavoriteKind,
            _entity_id: i32,
        ) -> Result<bool, ArchiveServiceError> {
            Ok(true)
        }

        async fn remove(
            &self,
            _user_id: i32,
            _kind: FavoriteKind,
            _entity_id: i32,
        ) -> Result<bool, ArchiveServiceError> {
            Ok(true)
        }
    }

    fn leia() -> User {
        User {
            id: 1,
            name: "Leia".into(),
            lastname: "Organa".into(),
            email: "leia@alderaan.example".into(),
            password: "hope".into(),
            created_date: Utc::now(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn should_create_user_active_with_creation_date() {
        let before = Utc::now();
        let uc = CreateUserUseCase {
            repo: MockUserRepo { users: vec![] },
        };
        let user = uc
            .execute(CreateUserInput {
                name: "Han".into(),
                lastname: "Solo".into(),
                email: "han@falcon.example".into(),
                password: "kessel".into(),
            })
            .await
            .unwrap();
        assert!(user.is_active, "new user should be active");
        assert!(user.created_date >= before);
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn should_reject_duplicate_email() {
        let uc = CreateUserUseCase {
            repo: MockUserRepo {
                users: vec![leia()],
            },
        };
        let result = uc
            .execute(CreateUserInput {
                name: "Impostor".into(),
                lastname: "Organa".into(),
                email: "leia@alderaan.example".into(),
                password: "x".into(),
            })
            .await;
        assert!(matches!(
            result,
            Err(ArchiveServiceError::EmailAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn should_list_users_with_their_favorites() {
        let uc = ListUsersUseCase {
            users: MockUserRepo {
                users: vec![leia()],
            },
            favorites: MockFavoriteRepo,
        };
        let result = uc.execute().await.unwrap();
        assert_eq!(result.len(), 1);
        let (user, favorites) = &result[0];
        assert_eq!(user.name, "Leia");
        assert!(favorites.planets.is_empty());
    }
}
