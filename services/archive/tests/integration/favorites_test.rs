use holocron_archive::domain::types::FavoriteKind;
use holocron_archive::error::ArchiveServiceError;
use holocron_archive::usecase::favorite::{
    AddFavoriteUseCase, GetUserFavoritesUseCase, RemoveFavoriteUseCase,
};

use crate::helpers::{MockFavoriteStore, MockUserRepo, landspeeder, luke, tatooine, test_user};

#[tokio::test]
async fn should_add_favorite_and_list_it_as_full_entity() {
    let users = MockUserRepo::new(vec![test_user(1)]);
    let store = MockFavoriteStore::new(vec![tatooine()], vec![luke()], vec![landspeeder()]);

    let add = AddFavoriteUseCase {
        users: users.clone(),
        catalog: store.catalog(),
        favorites: store.clone(),
    };
    add.execute(1, FavoriteKind::Planet, 1).await.unwrap();

    let get = GetUserFavoritesUseCase {
        users,
        favorites: store,
    };
    let favorites = get.execute(1).await.unwrap();
    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.planets[0].name, "Tatooine");
    assert!(favorites.characters.is_empty());
    assert!(favorites.vehicles.is_empty());
}

#[tokio::test]
async fn should_reject_second_add_of_same_pair_and_keep_one_row() {
    let users = MockUserRepo::new(vec![test_user(1)]);
    let store = MockFavoriteStore::new(vec![tatooine()], vec![], vec![]);
    let pairs = store.pairs_handle();

    let add = AddFavoriteUseCase {
        users: users.clone(),
        catalog: store.catalog(),
        favorites: store.clone(),
    };
    add.execute(1, FavoriteKind::Planet, 1).await.unwrap();

    let second = AddFavoriteUseCase {
        users,
        catalog: store.catalog(),
        favorites: store,
    };
    let result = second.execute(1, FavoriteKind::Planet, 1).await;
    assert!(
        matches!(
            result,
            Err(ArchiveServiceError::AlreadyFavorited(FavoriteKind::Planet))
        ),
        "expected AlreadyFavorited, got {result:?}"
    );
    assert_eq!(pairs.lock().unwrap().len(), 1, "exactly one pair must remain");
}

#[tokio::test]
async fn should_remove_favorite_then_reject_second_removal() {
    let users = MockUserRepo::new(vec![test_user(1)]);
    let store = MockFavoriteStore::new(vec![], vec![luke()], vec![]);
    let pairs = store.pairs_handle();

    let add = AddFavoriteUseCase {
        users: users.clone(),
        catalog: store.catalog(),
        favorites: store.clone(),
    };
    add.execute(1, FavoriteKind::Character, 1).await.unwrap();

    let remove = RemoveFavoriteUseCase {
        users: users.clone(),
        catalog: store.catalog(),
        favorites: store.clone(),
    };
    remove.execute(1, FavoriteKind::Character, 1).await.unwrap();
    assert!(pairs.lock().unwrap().is_empty());

    let again = RemoveFavoriteUseCase {
        users,
        catalog: store.catalog(),
        favorites: store,
    };
    let result = again.execute(1, FavoriteKind::Character, 1).await;
    assert!(matches!(
        result,
        Err(ArchiveServiceError::FavoriteNotFound(FavoriteKind::Character))
    ));
}

#[tokio::test]
async fn should_not_touch_pairs_when_user_is_unknown() {
    let store = MockFavoriteStore::new(vec![tatooine()], vec![], vec![]);
    let pairs = store.pairs_handle();

    let add = AddFavoriteUseCase {
        users: MockUserRepo::empty(),
        catalog: store.catalog(),
        favorites: store,
    };
    let result = add.execute(1, FavoriteKind::Planet, 1).await;
    assert!(matches!(result, Err(ArchiveServiceError::UserNotFound)));
    assert!(pairs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_not_touch_pairs_when_entity_is_unknown() {
    let users = MockUserRepo::new(vec![test_user(1)]);
    let store = MockFavoriteStore::new(vec![tatooine()], vec![], vec![]);
    let pairs = store.pairs_handle();

    let add = AddFavoriteUseCase {
        users,
        catalog: store.catalog(),
        favorites: store,
    };
    let result = add.execute(1, FavoriteKind::Planet, 999).await;
    assert!(matches!(result, Err(ArchiveServiceError::PlanetNotFound)));
    assert!(pairs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_support_vehicle_pairs_through_the_store_api() {
    // No route exposes vehicle favorites yet; the capability is still part
    // of the store contract.
    let users = MockUserRepo::new(vec![test_user(1)]);
    let store = MockFavoriteStore::new(vec![], vec![], vec![landspeeder()]);

    let add = AddFavoriteUseCase {
        users: users.clone(),
        catalog: store.catalog(),
        favorites: store.clone(),
    };
    add.execute(1, FavoriteKind::Vehicle, 1).await.unwrap();

    let get = GetUserFavoritesUseCase {
        users,
        favorites: store,
    };
    let favorites = get.execute(1).await.unwrap();
    assert_eq!(favorites.vehicles.len(), 1);
    assert_eq!(favorites.vehicles[0].name, "X-34 landspeeder");
}

#[tokio::test]
async fn should_keep_pairs_of_other_users_separate() {
    let users = MockUserRepo::new(vec![test_user(1), test_user(2)]);
    let store = MockFavoriteStore::new(vec![tatooine()], vec![], vec![]);

    let add = AddFavoriteUseCase {
        users: users.clone(),
        catalog: store.catalog(),
        favorites: store.clone(),
    };
    add.execute(1, FavoriteKind::Planet, 1).await.unwrap();

    let get = GetUserFavoritesUseCase {
        users,
        favorites: store,
    };
    let other = get.execute(2).await.unwrap();
    assert!(other.planets.is_empty());
}
