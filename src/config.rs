use std::env;

use chrono::Duration;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub cycle_lookback: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_DATABASE_URL: &str = "sqlite:teutuli.db";
        const DEFAULT_CYCLE_LOOKBACK_DAYS: i64 = 7;

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        if database_url.trim().is_empty() {
            return Err(AppError::Config("DATABASE_URL must not be empty".into()));
        }

        let cycle_lookback_days = env::var("CYCLE_LOOKBACK_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|days| (0..=366).contains(days))
            .unwrap_or(DEFAULT_CYCLE_LOOKBACK_DAYS);

        Ok(Self {
            database_url,
            cycle_lookback: Duration::days(cycle_lookback_days),
        })
    }
}
