pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

use axum::Json;

/// Handler for `GET /` — welcome banner.
pub async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Welcome to the Star Wars API"}))
}
