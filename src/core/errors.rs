use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManabiError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("ManabiError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ManabiError {
    fn from(error: std::io::Error) -> Self {
        ManabiError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ManabiError {
    fn from(error: reqwest::Error) -> Self {
        ManabiError::Reqwest(Box::new(error))
    }
}

impl From<tokio::task::JoinError> for ManabiError {
    fn from(error: tokio::task::JoinError) -> Self {
        ManabiError::Generation(error.to_string())
    }
}
