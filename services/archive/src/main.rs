use sea_orm::Database;
use tracing::info;

use holocron_archive::config::ArchiveConfig;
use holocron_archive::router::build_router;
use holocron_archive::state::AppState;
use holocron_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ArchiveConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.archive_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("archive service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
