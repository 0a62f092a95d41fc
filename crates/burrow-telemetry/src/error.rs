use thiserror::Error;

pub type Result<T> = std::result::Result<T, TelemetryError>;

#[derive(Debug, Clone, Error)]
pub enum TelemetryError {
    #[error("invalid log filter directive: {0}")]
    InvalidDirective(String),
    #[error("global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}
