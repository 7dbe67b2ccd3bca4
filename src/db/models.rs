use sqlx::FromRow;

use crate::standings::{ChampionshipRow, LeaderboardRow};

#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRecord {
    pub player: String,
    pub score: i64,
    pub points: i64,
    pub country: String,
}

impl From<LeaderboardRecord> for LeaderboardRow {
    fn from(record: LeaderboardRecord) -> Self {
        LeaderboardRow::new(record.player, record.score, record.points, record.country)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ChampionshipRecord {
    pub player: String,
    pub championship_points: i64,
}

impl From<ChampionshipRecord> for ChampionshipRow {
    fn from(record: ChampionshipRecord) -> Self {
        ChampionshipRow::new(record.player, record.championship_points)
    }
}

/// A challenge whose results were merged into the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EventRecord {
    pub id: String,
    pub ingested_on: String,
    pub participants: i64,
}
