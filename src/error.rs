use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid result payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Event {0} was already ingested")]
    EventAlreadyIngested(String),

    #[error("No archive found for {0}")]
    ArchiveNotFound(String),
}
