use thiserror::Error;

/// Failures outside of gameplay: the high-score file and the log sink.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed high score data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to configure logging: {0}")]
    Log(String),
}

pub type Result<T> = std::result::Result<T, Error>;
