use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PopError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("No pops found in place {place_id}")]
    NoData { place_id: String },

    #[error("{field} {name} is not valid")]
    InvalidName { field: &'static str, name: String },

    #[error("{entity} {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

/// Coarse classification surfaced to callers alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    NoData,
    InvalidName,
    AlreadyExists,
    InvalidInput,
    StoreFailure,
}

impl PopError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { entity, id: id.into() }
    }

    pub fn invalid_name(field: &'static str, name: impl Into<String>) -> Self {
        Self::InvalidName { field, name: name.into() }
    }

    pub fn already_exists(entity: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists { entity, id: id.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NoData { .. } => ErrorKind::NoData,
            Self::InvalidName { .. } => ErrorKind::InvalidName,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Store(_) | Self::IoError(_) | Self::SerdeError(_) | Self::ConfigError(_) => {
                ErrorKind::StoreFailure
            }
        }
    }

    /// True for the "row is absent" case, which some callers treat as a value
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, PopError>;
