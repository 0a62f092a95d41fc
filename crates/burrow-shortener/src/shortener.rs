use crate::error::Result;
use async_trait::async_trait;
use burrow_core::Alias;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores `url` and returns the alias it is reachable under.
    ///
    /// With `alias` set the caller's alias is used as is; otherwise one is
    /// generated.
    async fn shorten(&self, url: &str, alias: Option<Alias>) -> Result<Alias>;

    /// Returns the URL stored under `alias`.
    async fn resolve(&self, alias: &Alias) -> Result<String>;

    /// Removes the URL stored under `alias`. Unknown aliases are not an error.
    async fn delete(&self, alias: &Alias) -> Result<()>;
}
