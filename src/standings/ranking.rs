//! Display-ready orderings of the leaderboard and the championship.

use std::fmt;

use tabled::Tabled;

use super::{championship::Championship, event::UNKNOWN_COUNTRY, leaderboard::Leaderboard};

const GLOBE: &str = "\u{1F310}";
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Converts a two-letter country code to its flag emoji.
///
/// The unknown-country sentinel becomes a globe. Anything that is not two
/// ASCII letters is returned as given.
pub fn country_flag(code: &str) -> String {
    let upper = code.to_ascii_uppercase();

    if upper == UNKNOWN_COUNTRY {
        return GLOBE.to_string();
    }

    if upper.len() != 2 || !upper.bytes().all(|b| b.is_ascii_alphabetic()) {
        return code.to_string();
    }

    upper
        .bytes()
        .filter_map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b - b'A')))
        .collect()
}

/// A leaderboard row with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub position: usize,
    pub nickname: String,
    pub country: String,
    pub score: i64,
    pub points: i64,
}

impl Standing {
    pub fn decorated_name(&self) -> String {
        format!("{} {}", country_flag(&self.country), self.nickname)
    }
}

/// Orders the leaderboard by score then points, both descending. Equal
/// pairs keep table order.
pub fn rank(leaderboard: &Leaderboard) -> Vec<Standing> {
    let mut rows: Vec<_> = leaderboard.rows().iter().collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| b.points.cmp(&a.points)));

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| Standing {
            position: i + 1,
            nickname: row.nickname.clone(),
            country: row.country.clone(),
            score: row.score,
            points: row.points,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    fn for_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionLabel {
    Place(usize),
    Medal(Medal),
}

impl fmt::Display for PositionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place(position) => write!(f, "{position}"),
            Self::Medal(medal) => f.write_str(medal.emoji()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct DisplayRow {
    #[tabled(rename = "#")]
    pub position: PositionLabel,
    #[tabled(rename = "Player")]
    pub player: String,
    #[tabled(rename = "Score")]
    pub score: i64,
    #[tabled(rename = "Points")]
    pub points: i64,
}

impl From<&Standing> for DisplayRow {
    fn from(standing: &Standing) -> Self {
        Self {
            position: PositionLabel::Place(standing.position),
            player: standing.decorated_name(),
            score: standing.score,
            points: standing.points,
        }
    }
}

pub fn standings_view(standings: &[Standing]) -> Vec<DisplayRow> {
    standings.iter().map(DisplayRow::from).collect()
}

/// Same rows as [`standings_view`], with medals for the top three.
pub fn podium_view(standings: &[Standing]) -> Vec<DisplayRow> {
    standings
        .iter()
        .map(|standing| {
            let mut row = DisplayRow::from(standing);
            if let Some(medal) = Medal::for_position(standing.position) {
                row.position = PositionLabel::Medal(medal);
            }
            row
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionshipStanding {
    pub position: usize,
    pub nickname: String,
    pub championship_points: i64,
}

pub fn rank_championship(championship: &Championship) -> Vec<ChampionshipStanding> {
    let mut rows: Vec<_> = championship.rows().iter().collect();
    rows.sort_by(|a, b| b.championship_points.cmp(&a.championship_points));

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| ChampionshipStanding {
            position: i + 1,
            nickname: row.nickname.clone(),
            championship_points: row.championship_points,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ChampionshipDisplayRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Player")]
    pub player: String,
    #[tabled(rename = "Championship Points")]
    pub championship_points: i64,
}

pub fn championship_view(standings: &[ChampionshipStanding]) -> Vec<ChampionshipDisplayRow> {
    standings
        .iter()
        .map(|standing| ChampionshipDisplayRow {
            position: standing.position,
            player: standing.nickname.clone(),
            championship_points: standing.championship_points,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::{championship::ChampionshipRow, leaderboard::LeaderboardRow};

    fn nicknames(standings: &[Standing]) -> Vec<&str> {
        standings.iter().map(|s| s.nickname.as_str()).collect()
    }

    #[test]
    fn flags_are_built_from_regional_indicators() {
        assert_eq!(country_flag("AR"), "🇦🇷");
        assert_eq!(country_flag("ar"), "🇦🇷");
        assert_eq!(country_flag("ZZ"), "🌐");
        assert_eq!(country_flag("zz"), "🌐");
    }

    #[test]
    fn malformed_codes_pass_through() {
        assert_eq!(country_flag("X"), "X");
        assert_eq!(country_flag("USA"), "USA");
        assert_eq!(country_flag("1A"), "1A");
        assert_eq!(country_flag(""), "");
        assert_eq!(country_flag("é"), "é");
    }

    #[test]
    fn ranks_by_score_then_points() {
        let leaderboard = Leaderboard::from_rows([
            LeaderboardRow::new("Bo", 5, 100, "US"),
            LeaderboardRow::new("Ana", 7, 50, "AR"),
            LeaderboardRow::new("Cy", 5, 300, "FR"),
        ]);

        let standings = rank(&leaderboard);

        assert_eq!(nicknames(&standings), vec!["Ana", "Cy", "Bo"]);
        assert_eq!(standings.iter().map(|s| s.position).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn genuine_ties_keep_table_order() {
        let leaderboard = Leaderboard::from_rows([
            LeaderboardRow::new("Zed", 3, 100, "DE"),
            LeaderboardRow::new("Amy", 3, 100, "IT"),
            LeaderboardRow::new("Max", 3, 100, "NO"),
        ]);

        assert_eq!(nicknames(&rank(&leaderboard)), vec!["Zed", "Amy", "Max"]);
    }

    #[test]
    fn standings_view_decorates_names() {
        let leaderboard = Leaderboard::from_rows([
            LeaderboardRow::new("Ana", 6, 15000, "AR"),
            LeaderboardRow::new("Bo", 3, 12000, "X"),
        ]);

        let view = standings_view(&rank(&leaderboard));

        assert_eq!(
            view,
            vec![
                DisplayRow {
                    position: PositionLabel::Place(1),
                    player: "🇦🇷 Ana".to_string(),
                    score: 6,
                    points: 15000,
                },
                DisplayRow {
                    position: PositionLabel::Place(2),
                    player: "X Bo".to_string(),
                    score: 3,
                    points: 12000,
                },
            ]
        );
    }

    #[test]
    fn podium_swaps_top_three_positions_for_medals() {
        let leaderboard = Leaderboard::from_rows(
            (0..5).map(|i| LeaderboardRow::new(format!("p{i}"), 10 - i, 0, "ZZ")),
        );
        let standings = rank(&leaderboard);

        let podium = podium_view(&standings);
        let labels: Vec<String> = podium.iter().map(|row| row.position.to_string()).collect();

        assert_eq!(labels, vec!["🥇", "🥈", "🥉", "4", "5"]);
        let plain = standings_view(&standings);
        assert_eq!(
            podium.iter().map(|r| &r.player).collect::<Vec<_>>(),
            plain.iter().map(|r| &r.player).collect::<Vec<_>>()
        );
    }

    #[test]
    fn podium_with_fewer_than_three_players() {
        let leaderboard = Leaderboard::from_rows([LeaderboardRow::new("Solo", 1, 1, "DK")]);

        let podium = podium_view(&rank(&leaderboard));

        assert_eq!(podium.len(), 1);
        assert_eq!(podium[0].position, PositionLabel::Medal(Medal::Gold));
    }

    #[test]
    fn empty_tables_give_empty_views() {
        assert!(rank(&Leaderboard::default()).is_empty());
        assert!(podium_view(&[]).is_empty());
        assert!(rank_championship(&Championship::default()).is_empty());
    }

    #[test]
    fn championship_is_ranked_by_points_with_stable_ties() {
        let championship = Championship::from_rows([
            ChampionshipRow::new("Ana", 18),
            ChampionshipRow::new("Bo", 43),
            ChampionshipRow::new("Cy", 18),
        ]);

        let view = championship_view(&rank_championship(&championship));

        let order: Vec<_> = view.iter().map(|r| (r.position, r.player.as_str(), r.championship_points)).collect();
        assert_eq!(order, vec![(1, "Bo", 43), (2, "Ana", 18), (3, "Cy", 18)]);
    }
}
