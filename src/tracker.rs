//! Load, compute, commit: the operations the command line runs against the store.

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::db::{EventRecord, StandingsStore};
use crate::error::AppError;
use crate::standings::{
    ClosedWeek, CycleId, EventResult, Leaderboard, close_week, merge_into_leaderboard, score_event,
};

/// Merges one challenge's results into the stored leaderboard.
///
/// A challenge id that was already ingested is rejected before anything is
/// read, so a re-run of the same day does not double-count.
#[instrument(skip_all, fields(event_id = %event_id, participants = results.len()))]
pub async fn ingest_event<S: StandingsStore>(
    store: &S,
    event_id: &str,
    results: &EventResult,
    today: NaiveDate,
) -> Result<Leaderboard, AppError> {
    if let Some(previous) = store.find_event(event_id).await? {
        warn!(ingested_on = %previous.ingested_on, "📥 ⚠️ Event already ingested");
        return Err(AppError::EventAlreadyIngested(event_id.to_string()));
    }

    if results.is_empty() {
        debug!("📥 Event has no participants");
    }

    let scored = score_event(results);
    let leaderboard = merge_into_leaderboard(store.load_leaderboard().await?, &scored);

    let record = EventRecord {
        id: event_id.to_string(),
        ingested_on: today.format("%Y-%m-%d").to_string(),
        participants: results.len() as i64,
    };
    store.commit_event(&record, &leaderboard).await?;

    info!(players = leaderboard.len(), "📥 Leaderboard updated");
    Ok(leaderboard)
}

/// Closes `cycle`: the championship update, the archive and the leaderboard
/// reset are committed together or not at all.
#[instrument(skip_all, fields(cycle = %cycle))]
pub async fn close_cycle<S: StandingsStore>(store: &S, cycle: CycleId) -> Result<ClosedWeek, AppError> {
    let leaderboard = store.load_leaderboard().await?;
    let championship = store.load_championship().await?;

    let closed = close_week(leaderboard, championship, cycle);
    store.commit_week(&closed).await?;

    match closed.standings.first() {
        Some(winner) => info!(
            winner = %winner.nickname,
            players = closed.standings.len(),
            "🏁 Week closed"
        ),
        None => info!("🏁 Week closed without any results"),
    }

    Ok(closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_repository;
    use crate::standings::{LeaderboardRow, event::Participant, rank};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn ana_and_bo() -> EventResult {
        EventResult::new(vec![
            Participant::new("Ana", "AR", 5000),
            Participant::new("Bo", "US", 4000),
        ])
    }

    #[tokio::test]
    async fn three_events_then_weekly_close() {
        let store = memory_repository().await;

        for id in ["mon", "tue", "wed"] {
            ingest_event(&store, id, &ana_and_bo(), today()).await.unwrap();
        }

        let leaderboard = store.load_leaderboard().await.unwrap();
        assert_eq!(leaderboard.get("Ana"), Some(&LeaderboardRow::new("Ana", 6, 15000, "AR")));
        assert_eq!(leaderboard.get("Bo"), Some(&LeaderboardRow::new("Bo", 3, 12000, "US")));

        let names: Vec<_> = rank(&leaderboard).into_iter().map(|s| s.nickname).collect();
        assert_eq!(names, vec!["Ana", "Bo"]);

        let cycle = CycleId::new(2026, 42);
        let closed = close_cycle(&store, cycle).await.unwrap();

        assert_eq!(closed.championship.get("Ana").unwrap().championship_points, 25);
        assert_eq!(closed.championship.get("Bo").unwrap().championship_points, 18);
        assert!(store.load_leaderboard().await.unwrap().is_empty());
        assert_eq!(store.load_championship().await.unwrap(), closed.championship);
        assert_eq!(store.load_archive(cycle).await.unwrap(), Some(leaderboard));
    }

    #[tokio::test]
    async fn repeated_event_id_is_rejected() {
        let store = memory_repository().await;

        ingest_event(&store, "mon", &ana_and_bo(), today()).await.unwrap();
        let result = ingest_event(&store, "mon", &ana_and_bo(), today()).await;

        assert!(matches!(result, Err(AppError::EventAlreadyIngested(id)) if id == "mon"));
        let leaderboard = store.load_leaderboard().await.unwrap();
        assert_eq!(leaderboard.get("Ana").unwrap().score, 2);
    }

    #[tokio::test]
    async fn empty_event_is_recorded_without_changes() {
        let store = memory_repository().await;

        let leaderboard = ingest_event(&store, "quiet", &EventResult::default(), today())
            .await
            .unwrap();

        assert!(leaderboard.is_empty());
        let record = store.find_event("quiet").await.unwrap().unwrap();
        assert_eq!(record.participants, 0);
        assert_eq!(record.ingested_on, "2026-10-19");
    }

    #[tokio::test]
    async fn stored_order_breaks_exact_ties_by_previous_ranking() {
        let store = memory_repository().await;
        let event = |names: &[&str]| {
            EventResult::new(names.iter().map(|name| Participant::new(*name, "ZZ", 100)).collect())
        };

        ingest_event(&store, "mon", &event(&["A", "B"]), today()).await.unwrap();
        ingest_event(&store, "tue", &event(&["B", "C", "A"]), today()).await.unwrap();
        ingest_event(&store, "wed", &event(&["A", "B"]), today()).await.unwrap();

        let standings = rank(&store.load_leaderboard().await.unwrap());
        let top: Vec<_> = standings.iter().map(|s| (s.nickname.as_str(), s.score)).collect();
        assert_eq!(top, vec![("B", 5), ("A", 5), ("C", 2)]);
    }

    #[tokio::test]
    async fn closing_same_cycle_twice_fails_and_keeps_state() {
        let store = memory_repository().await;
        let cycle = CycleId::new(2026, 42);

        ingest_event(&store, "mon", &ana_and_bo(), today()).await.unwrap();
        close_cycle(&store, cycle).await.unwrap();

        ingest_event(&store, "tue", &ana_and_bo(), today()).await.unwrap();
        let before = store.load_championship().await.unwrap();

        assert!(close_cycle(&store, cycle).await.is_err());
        assert_eq!(store.load_championship().await.unwrap(), before);
        assert_eq!(store.load_leaderboard().await.unwrap().len(), 2);
    }
}
