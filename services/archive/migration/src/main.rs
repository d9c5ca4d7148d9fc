use sea_orm_migration::prelude::*;

use holocron_archive_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
