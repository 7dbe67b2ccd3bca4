//! Tracing subscriber for the command line.
//!
//! Tables are printed on stdout, so log lines go to stderr. Setting `LOG_DIR`
//! also writes them to a daily rolling file, and `LOG_FORMAT=json` switches
//! both outputs to JSON lines.

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        fmt,
        time::ChronoLocal,
        writer::{BoxMakeWriter, MakeWriterExt},
    },
};

use crate::error::AppError;

const LOG_FILE_PREFIX: &str = "teutuli.log";

/// Keeps the file writer alive until the process exits so buffered lines are flushed.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub fn init() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let writer = match env::var("LOG_DIR") {
        Ok(dir) => {
            let stderr = std::io::stderr.with_max_level(tracing::Level::INFO);
            BoxMakeWriter::new(stderr.and(file_writer(&dir)?))
        }
        Err(_) => BoxMakeWriter::new(std::io::stderr),
    };

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(!json)
        .with_writer(writer);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| AppError::Config(format!("cannot install logger: {e}")))?;

    tracing::debug!("logger initialized");
    Ok(())
}

fn file_writer(dir: &str) -> Result<NonBlocking, AppError> {
    let mut appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX);
    if let Some(n) = env::var("LOG_MAX_FILES").ok().and_then(|v| v.parse::<usize>().ok()) {
        appender = appender.max_log_files(n);
    }

    let appender = appender
        .build(dir)
        .map_err(|e| AppError::Config(format!("cannot open log directory {dir}: {e}")))?;

    let (writer, guard) = non_blocking(appender);
    FILE_GUARD
        .set(guard)
        .map_err(|_| AppError::Config("logger already initialized".into()))?;

    Ok(writer)
}
