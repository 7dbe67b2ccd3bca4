use std::collections::HashMap;

use super::ranking::Standing;

/// Championship points by final weekly rank, winner first.
pub const POINTS_BY_RANK: [i64; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Championship points for a 0-based weekly rank. Ranks past the table earn nothing.
pub fn points_for_rank(rank: usize) -> i64 {
    POINTS_BY_RANK.get(rank).copied().unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionshipRow {
    pub nickname: String,
    pub championship_points: i64,
}

impl ChampionshipRow {
    pub fn new(nickname: impl Into<String>, championship_points: i64) -> Self {
        Self {
            nickname: nickname.into(),
            championship_points,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Championship {
    rows: Vec<ChampionshipRow>,
    index: HashMap<String, usize>,
}

impl Championship {
    pub fn from_rows(rows: impl IntoIterator<Item = ChampionshipRow>) -> Self {
        let mut championship = Self::default();
        for row in rows {
            championship.award(&row.nickname, row.championship_points);
        }
        championship
    }

    pub fn rows(&self) -> &[ChampionshipRow] {
        &self.rows
    }

    #[cfg(test)]
    pub fn get(&self, nickname: &str) -> Option<&ChampionshipRow> {
        self.index.get(nickname).map(|&i| &self.rows[i])
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn sort_by_points(&mut self) {
        self.rows
            .sort_by(|a, b| b.championship_points.cmp(&a.championship_points));
        self.index = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.nickname.clone(), i))
            .collect();
    }

    fn award(&mut self, nickname: &str, points: i64) {
        match self.index.get(nickname).copied() {
            Some(i) => self.rows[i].championship_points += points,
            None => {
                self.index.insert(nickname.to_string(), self.rows.len());
                self.rows.push(ChampionshipRow::new(nickname, points));
            }
        }
    }
}

/// Folds a ranked week into the championship.
///
/// `weekly` must be ordered as [`rank`](super::ranking::rank) orders it. Every
/// ranked player gets a row, even when their rank is worth zero points.
/// Applying the same week twice counts it twice. The result is ordered by
/// points, equal totals keeping their previous order.
pub fn merge_into_championship(mut current: Championship, weekly: &[Standing]) -> Championship {
    for (rank, standing) in weekly.iter().enumerate() {
        current.award(&standing.nickname, points_for_rank(rank));
    }
    current.sort_by_points();
    current
}
