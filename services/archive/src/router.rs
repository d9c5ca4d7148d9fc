use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use holocron_core::health::{healthz, readyz};
use holocron_core::middleware::request_id_layer;

use crate::handlers::character::{create_person, get_people, get_person};
use crate::handlers::favorite::{
    add_favorite_character, add_favorite_planet, get_user_favorites, remove_favorite_character,
    remove_favorite_planet,
};
use crate::handlers::planet::{create_planet, get_planet, get_planets};
use crate::handlers::user::{create_user, get_users};
use crate::handlers::welcome;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Welcome
        .route("/", get(welcome))
        // Planets
        .route("/planets", post(create_planet))
        .route("/planets", get(get_planets))
        .route("/planets/{planet_id}", get(get_planet))
        // People
        .route("/people", post(create_person))
        .route("/people", get(get_people))
        .route("/people/{people_id}", get(get_person))
        // Users
        .route("/users", get(get_users))
        .route("/users", post(create_user))
        .route("/users/{user_id}/favorites", get(get_user_favorites))
        // Favorites
        .route(
            "/favorite/planet/{user_id}/{planet_id}",
            post(add_favorite_planet),
        )
        .route(
            "/favorite/planet/{user_id}/{planet_id}",
            delete(remove_favorite_planet),
        )
        .route(
            "/favorite/people/{user_id}/{people_id}",
            post(add_favorite_character),
        )
        .route(
            "/favorite/people/{user_id}/{people_id}",
            delete(remove_favorite_character),
        )
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
