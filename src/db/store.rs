use async_trait::async_trait;

use super::models::EventRecord;
use crate::error::AppError;
use crate::standings::{Championship, ClosedWeek, CycleId, Leaderboard};

/// Durable home of the standings tables.
///
/// Each `commit_*` method must apply all of its writes or none of them.
#[async_trait]
pub trait StandingsStore: Send + Sync {
    async fn load_leaderboard(&self) -> Result<Leaderboard, AppError>;

    async fn load_championship(&self) -> Result<Championship, AppError>;

    async fn find_event(&self, event_id: &str) -> Result<Option<EventRecord>, AppError>;

    /// Records an ingested event and replaces the leaderboard with `leaderboard`.
    async fn commit_event(&self, event: &EventRecord, leaderboard: &Leaderboard) -> Result<(), AppError>;

    /// Writes the new championship and the archive, then clears the leaderboard.
    async fn commit_week(&self, closed: &ClosedWeek) -> Result<(), AppError>;

    /// Returns `None` when the cycle was never closed.
    async fn load_archive(&self, cycle: CycleId) -> Result<Option<Leaderboard>, AppError>;
}
