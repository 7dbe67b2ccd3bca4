//! Scoring engine: turns per-event placements into the weekly leaderboard and
//! the long-running championship. Everything here is pure; storage lives in
//! [`crate::db`].

pub mod championship;
pub mod cycle;
pub mod event;
pub mod leaderboard;
pub mod ranking;
pub mod scoring;

pub use championship::{Championship, ChampionshipRow};
pub use cycle::{ClosedWeek, CycleId, close_week};
pub use event::EventResult;
pub use leaderboard::{Leaderboard, LeaderboardRow, merge_into_leaderboard};
pub use ranking::{championship_view, podium_view, rank, rank_championship, standings_view};
pub use scoring::score_event;
