use std::path::PathBuf;

use crate::error::AppError;
use crate::standings::CycleId;

const USAGE: &str = "teutuli <ingest <event-id> <payload.json> | close-week | standings | podium | archive <year> <week>>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Merge a downloaded highscores payload into the leaderboard.
    Ingest { event_id: String, payload: PathBuf },
    /// Fold the week into the championship, archive and reset the leaderboard.
    CloseWeek,
    Standings,
    Podium,
    Archive { cycle: CycleId },
}

impl Command {
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            ["ingest", event_id, payload] => Ok(Self::Ingest {
                event_id: event_id.to_string(),
                payload: PathBuf::from(payload),
            }),
            ["close-week"] => Ok(Self::CloseWeek),
            ["standings"] => Ok(Self::Standings),
            ["podium"] => Ok(Self::Podium),
            ["archive", year, week] => {
                let year = year
                    .parse()
                    .map_err(|_| AppError::Usage(format!("invalid year {year:?}")))?;
                let week = week
                    .parse()
                    .ok()
                    .filter(|week| (1..=53).contains(week))
                    .ok_or_else(|| AppError::Usage(format!("invalid week {week:?}")))?;
                Ok(Self::Archive {
                    cycle: CycleId::new(year, week),
                })
            }
            _ => Err(AppError::Usage(USAGE.to_string())),
        }
    }
}
