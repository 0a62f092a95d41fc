pub mod memory;
pub mod sqlite;

pub use burrow_core::error::{Operation, Result, StorageError};
pub use burrow_core::{Alias, ReadRepository, Repository};
pub use memory::InMemoryRepository;
pub use sqlite::{SqliteConfig, SqliteRepository};
