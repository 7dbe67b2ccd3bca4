use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use super::models::{ChampionshipRecord, EventRecord, LeaderboardRecord};
use super::store::StandingsStore;
use crate::error::AppError;
use crate::standings::{Championship, ClosedWeek, CycleId, Leaderboard};

#[derive(Clone, Debug)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StandingsStore for Repository {
    // === Leaderboard ===

    async fn load_leaderboard(&self) -> Result<Leaderboard, AppError> {
        let records = sqlx::query_as::<_, LeaderboardRecord>(
            "SELECT player, score, points, country FROM leaderboard ORDER BY row_order ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(Leaderboard::from_rows(records.into_iter().map(Into::into)))
    }

    // === Championship ===

    async fn load_championship(&self) -> Result<Championship, AppError> {
        let records = sqlx::query_as::<_, ChampionshipRecord>(
            "SELECT player, championship_points FROM championship ORDER BY row_order ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(Championship::from_rows(records.into_iter().map(Into::into)))
    }

    // === Events ===

    async fn find_event(&self, event_id: &str) -> Result<Option<EventRecord>, AppError> {
        let event = sqlx::query_as::<_, EventRecord>(
            "SELECT id, ingested_on, participants FROM events WHERE id = ?",
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    async fn commit_event(&self, event: &EventRecord, leaderboard: &Leaderboard) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO events (id, ingested_on, participants) VALUES (?, ?, ?)")
            .bind(&event.id)
            .bind(&event.ingested_on)
            .bind(event.participants)
            .execute(&mut *tx)
            .await?;

        replace_leaderboard(&mut tx, leaderboard).await?;

        tx.commit().await?;
        Ok(())
    }

    // === Weekly cycle ===

    async fn commit_week(&self, closed: &ClosedWeek) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        replace_championship(&mut tx, &closed.championship).await?;

        let cycle = closed.archive.cycle;
        sqlx::query("INSERT INTO archives (cycle, iso_year, iso_week) VALUES (?, ?, ?)")
            .bind(cycle.archive_name())
            .bind(cycle.year)
            .bind(cycle.week)
            .execute(&mut *tx)
            .await?;

        for (row_order, row) in closed.archive.leaderboard.rows().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO leaderboard_archive (cycle, row_order, player, score, points, country)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(cycle.archive_name())
            .bind(row_order as i64)
            .bind(&row.nickname)
            .bind(row.score)
            .bind(row.points)
            .bind(&row.country)
            .execute(&mut *tx)
            .await?;
        }

        replace_leaderboard(&mut tx, &closed.leaderboard).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn load_archive(&self, cycle: CycleId) -> Result<Option<Leaderboard>, AppError> {
        let exists = sqlx::query_scalar::<_, i32>("SELECT 1 FROM archives WHERE cycle = ?")
            .bind(cycle.archive_name())
            .fetch_optional(&self.pool)
            .await?;

        if exists.is_none() {
            return Ok(None);
        }

        let records = sqlx::query_as::<_, LeaderboardRecord>(
            r#"
            SELECT player, score, points, country
            FROM leaderboard_archive
            WHERE cycle = ?
            ORDER BY row_order ASC
            "#,
        )
        .bind(cycle.archive_name())
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Leaderboard::from_rows(records.into_iter().map(Into::into))))
    }
}

async fn replace_leaderboard(conn: &mut SqliteConnection, leaderboard: &Leaderboard) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM leaderboard").execute(&mut *conn).await?;

    for (row_order, row) in leaderboard.rows().iter().enumerate() {
        sqlx::query(
            "INSERT INTO leaderboard (player, row_order, score, points, country) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&row.nickname)
        .bind(row_order as i64)
        .bind(row.score)
        .bind(row.points)
        .bind(&row.country)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

async fn replace_championship(
    conn: &mut SqliteConnection,
    championship: &Championship,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM championship").execute(&mut *conn).await?;

    for (row_order, row) in championship.rows().iter().enumerate() {
        sqlx::query("INSERT INTO championship (player, row_order, championship_points) VALUES (?, ?, ?)")
            .bind(&row.nickname)
            .bind(row_order as i64)
            .bind(row.championship_points)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}
