use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when configuring a generator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid alias length {length}; expected 1..={max}")]
    InvalidLength { length: usize, max: usize },
}
