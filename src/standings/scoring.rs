use super::event::EventResult;

/// Points earned by one participant in one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredEntry {
    pub nickname: String,
    /// `N` for first place down to `1` for last.
    pub ordinal_score: i64,
    pub points: i64,
    pub country: String,
}

impl ScoredEntry {
    pub fn new(
        nickname: impl Into<String>,
        ordinal_score: i64,
        points: i64,
        country: impl Into<String>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            ordinal_score,
            points,
            country: country.into(),
        }
    }
}

/// Awards ordinal scores by feed position. Ties in the feed are not
/// re-sorted by in-game points.
pub fn score_event(results: &EventResult) -> Vec<ScoredEntry> {
    let total = results.len() as i64;

    results
        .participants
        .iter()
        .enumerate()
        .map(|(i, participant)| ScoredEntry {
            nickname: participant.nickname.clone(),
            ordinal_score: total - i as i64,
            points: i64::from(participant.total_points),
            country: participant.country_code.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::event::Participant;

    #[test]
    fn first_place_scores_participant_count() {
        let event = EventResult::new(vec![
            Participant::new("Ana", "AR", 5000),
            Participant::new("Bo", "US", 4000),
            Participant::new("Cy", "FR", 3000),
        ]);

        let scored = score_event(&event);

        assert_eq!(
            scored,
            vec![
                ScoredEntry::new("Ana", 3, 5000, "AR"),
                ScoredEntry::new("Bo", 2, 4000, "US"),
                ScoredEntry::new("Cy", 1, 3000, "FR"),
            ]
        );
    }

    #[test]
    fn ordinal_scores_cover_one_to_n_without_repeats() {
        let participants = (0..25)
            .map(|i| Participant::new(format!("player{i}"), "ZZ", 1000))
            .collect();
        let scored = score_event(&EventResult::new(participants));

        let scores: Vec<i64> = scored.iter().map(|e| e.ordinal_score).collect();
        let expected: Vec<i64> = (1..=25).rev().collect();
        assert_eq!(scores, expected);
    }

    #[test]
    fn feed_order_wins_over_in_game_points() {
        let event = EventResult::new(vec![
            Participant::new("Low", "DE", 100),
            Participant::new("High", "IT", 9000),
        ]);

        let scored = score_event(&event);

        assert_eq!(scored[0].nickname, "Low");
        assert_eq!(scored[0].ordinal_score, 2);
        assert_eq!(scored[1].ordinal_score, 1);
    }

    #[test]
    fn empty_event_scores_nothing() {
        assert!(score_event(&EventResult::default()).is_empty());
    }
}
