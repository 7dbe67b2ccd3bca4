use sqlx::SqlitePool;
use tracing::info;

use crate::error::AppError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS leaderboard (
    player TEXT PRIMARY KEY NOT NULL,
    row_order INTEGER NOT NULL,
    score INTEGER NOT NULL DEFAULT 0,
    points INTEGER NOT NULL DEFAULT 0,
    country TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS championship (
    player TEXT PRIMARY KEY NOT NULL,
    row_order INTEGER NOT NULL,
    championship_points INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS archives (
    cycle TEXT PRIMARY KEY NOT NULL,
    iso_year INTEGER NOT NULL,
    iso_week INTEGER NOT NULL,
    archived_at INTEGER NOT NULL DEFAULT (unixepoch())
);

CREATE TABLE IF NOT EXISTS leaderboard_archive (
    cycle TEXT NOT NULL,
    row_order INTEGER NOT NULL,
    player TEXT NOT NULL,
    score INTEGER NOT NULL,
    points INTEGER NOT NULL,
    country TEXT NOT NULL,
    PRIMARY KEY (cycle, player),
    FOREIGN KEY (cycle) REFERENCES archives(cycle) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY NOT NULL,
    ingested_on TEXT NOT NULL,
    participants INTEGER NOT NULL,
    created_at INTEGER NOT NULL DEFAULT (unixepoch())
);

CREATE INDEX IF NOT EXISTS idx_leaderboard_archive_cycle ON leaderboard_archive(cycle);
"#;

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("🗄️ Database migrations completed");
    Ok(())
}
