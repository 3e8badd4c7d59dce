use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Duplicate listing id: {id}")]
    DuplicateListing { id: String },

    #[error("Invalid listing {id}: {message}")]
    InvalidListing { id: String, message: String },

    #[error("{provider} failed: {message}")]
    Provider { provider: String, message: String },
}

impl RentalError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;
