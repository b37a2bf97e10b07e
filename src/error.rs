use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Arithmetic overflow while splitting the bill")]
    ArithmeticOverflow,
    #[error("Sharing is not available on this platform")]
    ShareUnavailable,
    #[error("Share was cancelled")]
    ShareCancelled,
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;
