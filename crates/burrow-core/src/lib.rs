//! Core types and traits for the Burrow URL shortener.
//!
//! This crate holds the alias type, the storage error taxonomy and the
//! repository contract shared by the storage backends and their callers.

pub mod alias;
pub mod error;
pub mod repository;

pub use alias::{Alias, MAX_ALIAS_LENGTH};
pub use error::{Cause, CoreError, Operation, StorageError};
pub use repository::{ReadRepository, Repository};
