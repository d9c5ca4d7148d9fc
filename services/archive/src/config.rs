/// Archive service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ArchiveConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `ARCHIVE_PORT`.
    pub archive_port: u16,
}

impl ArchiveConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            archive_port: std::env::var("ARCHIVE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}
