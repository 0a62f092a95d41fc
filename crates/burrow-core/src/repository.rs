use crate::alias::Alias;
use crate::error::Result;
use async_trait::async_trait;

/// A read-only view of a repository.
///
/// Lets read paths such as a redirect handler hold only lookup access.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns the URL stored under `alias`.
    ///
    /// Fails with `StorageError::NotFound` if no record matches.
    async fn get_by_alias(&self, alias: &Alias) -> Result<String>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new URL record and returns its assigned id.
    ///
    /// Fails with `StorageError::AliasExists` if the alias is already taken;
    /// the existing record is left untouched.
    async fn insert(&self, url: &str, alias: &Alias) -> Result<i64>;

    /// Removes the record stored under `alias`.
    ///
    /// Deleting an alias that does not exist is not an error.
    async fn delete_by_alias(&self, alias: &Alias) -> Result<()>;
}
