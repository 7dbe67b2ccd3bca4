use std::collections::HashMap;

use super::scoring::ScoredEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub nickname: String,
    pub score: i64,
    pub points: i64,
    /// Country reported by the most recent event.
    pub country: String,
}

impl LeaderboardRow {
    pub fn new(nickname: impl Into<String>, score: i64, points: i64, country: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            score,
            points,
            country: country.into(),
        }
    }
}

/// Cumulative standings of the running cycle, one row per nickname. After a
/// merge the rows are in ranking order, so ties keep the previous ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    rows: Vec<LeaderboardRow>,
    index: HashMap<String, usize>,
}

impl Leaderboard {
    /// Builds a leaderboard from stored rows. A repeated nickname is folded
    /// into its first row.
    pub fn from_rows(rows: impl IntoIterator<Item = LeaderboardRow>) -> Self {
        let mut leaderboard = Self::default();
        for row in rows {
            leaderboard.apply(&ScoredEntry::new(row.nickname, row.score, row.points, row.country));
        }
        leaderboard
    }

    pub fn rows(&self) -> &[LeaderboardRow] {
        &self.rows
    }

    #[cfg(test)]
    pub fn get(&self, nickname: &str) -> Option<&LeaderboardRow> {
        self.index.get(nickname).map(|&i| &self.rows[i])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stable sort by score then points, both descending.
    fn sort_by_standing(&mut self) {
        self.rows
            .sort_by(|a, b| b.score.cmp(&a.score).then_with(|| b.points.cmp(&a.points)));
        self.index = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.nickname.clone(), i))
            .collect();
    }

    fn apply(&mut self, entry: &ScoredEntry) {
        match self.index.get(&entry.nickname).copied() {
            Some(i) => {
                let row = &mut self.rows[i];
                row.score += entry.ordinal_score;
                row.points += entry.points;
                row.country.clone_from(&entry.country);
            }
            None => {
                self.index.insert(entry.nickname.clone(), self.rows.len());
                self.rows.push(LeaderboardRow::new(
                    entry.nickname.clone(),
                    entry.ordinal_score,
                    entry.points,
                    entry.country.clone(),
                ));
            }
        }
    }
}

/// Adds one event's scores to the leaderboard. Existing players accumulate
/// score and points and take the event's country; new players are added.
/// The result is re-ordered by standing, equal rows keeping their order.
pub fn merge_into_leaderboard(mut current: Leaderboard, scored: &[ScoredEntry]) -> Leaderboard {
    for entry in scored {
        current.apply(entry);
    }
    current.sort_by_standing();
    current
}
