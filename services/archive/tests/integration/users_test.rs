use holocron_archive::domain::types::FavoriteKind;
use holocron_archive::error::ArchiveServiceError;
use holocron_archive::usecase::favorite::AddFavoriteUseCase;
use holocron_archive::usecase::user::{CreateUserInput, CreateUserUseCase, ListUsersUseCase};

use crate::helpers::{MockFavoriteStore, MockUserRepo, tatooine, test_user};

#[tokio::test]
async fn should_create_user_and_persist_it() {
    let repo = MockUserRepo::empty();
    let users_handle = repo.users_handle();

    let uc = CreateUserUseCase { repo };
    let user = uc
        .execute(CreateUserInput {
            name: "Han".to_owned(),
            lastname: "Solo".to_owned(),
            email: "han@falcon.example".to_owned(),
            password: "kessel".to_owned(),
        })
        .await
        .unwrap();

    assert!(user.is_active);
    let users = users_handle.lock().unwrap();
    assert_eq!(users.len(), 1, "expected exactly one user to be stored");
    assert_eq!(users[0].email, "han@falcon.example");
}

#[tokio::test]
async fn should_reject_duplicate_email_and_persist_nothing_new() {
    let repo = MockUserRepo::new(vec![test_user(1)]);
    let users_handle = repo.users_handle();

    let uc = CreateUserUseCase { repo };
    let result = uc
        .execute(CreateUserInput {
            name: "Impostor".to_owned(),
            lastname: "Skywalker".to_owned(),
            email: test_user(1).email,
            password: "x".to_owned(),
        })
        .await;

    assert!(matches!(
        result,
        Err(ArchiveServiceError::EmailAlreadyExists)
    ));
    assert_eq!(users_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_list_users_with_favorite_names_projection() {
    let users = MockUserRepo::new(vec![test_user(1)]);
    let store = MockFavoriteStore::new(vec![tatooine()], vec![], vec![]);

    let add = AddFavoriteUseCase {
        users: users.clone(),
        catalog: store.catalog(),
        favorites: store.clone(),
    };
    add.execute(1, FavoriteKind::Planet, 1).await.unwrap();

    let list = ListUsersUseCase {
        users,
        favorites: store,
    };
    let result = list.execute().await.unwrap();
    assert_eq!(result.len(), 1);
    let (user, favorites) = &result[0];
    assert_eq!(user.id, 1);
    let names: Vec<&str> = favorites.planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Tatooine"]);
}
