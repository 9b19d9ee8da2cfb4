use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordVaultError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(Box<reqwest::Error>),

    #[error("Request failed with status {status}: {message}")]
    BadStatus { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("Word \"{english}\" already exists: {message}")]
    Conflict { english: String, message: String },

    #[error("Not logged in")]
    Auth,

    #[error("Word not found: {0}")]
    NotFound(u64),

    #[error("WordVaultError: {0}")]
    Custom(String),
}

impl WordVaultError {
    /// Conflicts are a confirmation request, not a terminal failure. The
    /// caller is expected to retry with a forced create if the user agrees.
    pub fn is_conflict(&self) -> bool {
        matches!(self, WordVaultError::Conflict { .. })
    }
}

impl From<std::io::Error> for WordVaultError {
    fn from(error: std::io::Error) -> Self {
        WordVaultError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for WordVaultError {
    fn from(error: reqwest::Error) -> Self {
        WordVaultError::Network(Box::new(error))
    }
}
