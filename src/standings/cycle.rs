use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};

use super::{
    championship::{Championship, merge_into_championship},
    leaderboard::Leaderboard,
    ranking::{Standing, rank},
};

/// ISO year and week a leaderboard cycle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleId {
    pub year: i32,
    pub week: u32,
}

impl CycleId {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    pub fn containing(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self::new(iso.year(), iso.week())
    }

    /// Cycle being closed by a run on `today`; the close runs after the week
    /// it archives, so the date is moved back by `lookback` first.
    pub fn closing_on(today: NaiveDate, lookback: Duration) -> Self {
        Self::containing(today - lookback)
    }

    pub fn archive_name(&self) -> String {
        format!("leaderboard_{}_week_{}", self.year, self.week)
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.archive_name())
    }
}

/// Leaderboard snapshot kept for a closed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub cycle: CycleId,
    pub leaderboard: Leaderboard,
}

/// Everything a weekly close produces. Nothing is persisted until the caller
/// stores all of it at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedWeek {
    pub standings: Vec<Standing>,
    pub archive: Archive,
    pub leaderboard: Leaderboard,
    pub championship: Championship,
}

/// Ranks the week, folds it into the championship, archives the leaderboard
/// and hands back an empty one.
pub fn close_week(leaderboard: Leaderboard, championship: Championship, cycle: CycleId) -> ClosedWeek {
    let standings = rank(&leaderboard);
    let championship = merge_into_championship(championship, &standings);

    ClosedWeek {
        standings,
        archive: Archive { cycle, leaderboard },
        leaderboard: Leaderboard::default(),
        championship,
    }
}
