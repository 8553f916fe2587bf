use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TEI predict error: {0}")]
    Tei(String),

    #[error("unknown sentiment label: {0}")]
    UnknownLabel(String),

    #[error("classifier returned {actual} predictions for {expected} inputs")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("sentiment batch size must be greater than zero")]
    InvalidBatchSize,
}
