use burrow_core::{CoreError, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid alias: {0}")]
    InvalidAlias(String),
    #[error("alias already exists: {0}")]
    AliasConflict(String),
    #[error("url not found for alias: {0}")]
    NotFound(String),
    #[error("no free alias after {attempts} attempts")]
    AliasSpaceExhausted { attempts: u32 },
    #[error("storage failure")]
    Storage(#[source] StorageError),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidAlias(message) => Self::InvalidAlias(message),
        }
    }
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::AliasExists { alias, .. } => Self::AliasConflict(alias),
            StorageError::NotFound { alias, .. } => Self::NotFound(alias),
            other => Self::Storage(other),
        }
    }
}
