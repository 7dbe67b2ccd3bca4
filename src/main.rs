use std::process::ExitCode;

use chrono::Local;
use tabled::Table;
use tracing::{error, info};

use cli::Command;
use config::Config;
use db::{Repository, StandingsStore};
use error::AppError;
use standings::{
    EventResult, championship_view, podium_view, rank, rank_championship, standings_view,
};

mod cli;
mod config;
mod db;
mod error;
mod logging;
mod standings;
mod tracker;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    if let Err(e) = logging::init() {
        eprintln!("teutuli: {e}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(usage)) => {
            eprintln!("usage: {usage}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "❌ Command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let command = Command::parse(std::env::args().skip(1))?;
    let config = Config::from_env()?;

    let pool = db::connect(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    let repo = Repository::new(pool);

    let today = Local::now().date_naive();

    match command {
        Command::Ingest { event_id, payload } => {
            let payload = tokio::fs::read_to_string(&payload).await?;
            let results = EventResult::from_highscores_json(&payload)?;
            info!(event_id = %event_id, participants = results.len(), "📥 Ingesting event");

            let leaderboard = tracker::ingest_event(&repo, &event_id, &results, today).await?;
            print_section("Current standings", Table::new(standings_view(&rank(&leaderboard))));
        }
        Command::CloseWeek => {
            let cycle = standings::CycleId::closing_on(today, config.cycle_lookback);
            let closed = tracker::close_cycle(&repo, cycle).await?;

            print_section("Grand Prix results", Table::new(podium_view(&closed.standings)));
            print_championship(&closed.championship);
        }
        Command::Standings => {
            let leaderboard = repo.load_leaderboard().await?;
            print_section("Current standings", Table::new(standings_view(&rank(&leaderboard))));
            print_championship(&repo.load_championship().await?);
        }
        Command::Podium => {
            let leaderboard = repo.load_leaderboard().await?;
            print_section("Podium", Table::new(podium_view(&rank(&leaderboard))));
        }
        Command::Archive { cycle } => {
            let leaderboard = repo
                .load_archive(cycle)
                .await?
                .ok_or_else(|| AppError::ArchiveNotFound(cycle.archive_name()))?;
            print_section(&cycle.archive_name(), Table::new(standings_view(&rank(&leaderboard))));
        }
    }

    Ok(())
}

fn print_championship(championship: &standings::Championship) {
    print_section(
        "Guessers Championship standings",
        Table::new(championship_view(&rank_championship(championship))),
    );
}

fn print_section(title: &str, table: Table) {
    println!("{title}:\n{table}\n");
}
