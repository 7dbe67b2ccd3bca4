use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use crate::error::AppError;

mod migrations;
mod models;
mod repository;
mod store;

pub use migrations::run_migrations;
pub use models::EventRecord;
pub use repository::Repository;
pub use store::StandingsStore;

/// Opens the SQLite database, creating the file when missing. A single
/// connection keeps every command a single writer.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    debug!(database_url, "🗄️ Opening database");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}

#[cfg(test)]
pub(crate) async fn memory_repository() -> Repository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    run_migrations(&pool).await.expect("schema");
    Repository::new(pool)
}
