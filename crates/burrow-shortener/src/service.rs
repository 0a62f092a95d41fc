use crate::error::{Result, ShortenerError};
use crate::shortener::Shortener;
use async_trait::async_trait;
use burrow_core::{Alias, Repository, StorageError};
use burrow_generator::Generator;
use burrow_telemetry::err;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use typed_builder::TypedBuilder;
use url::Url;

/// Tuning knobs for [`ShortenerService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// How many generated aliases to try before giving up on a save.
    #[builder(default = 5)]
    max_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - URL validation
/// - Alias generation, retrying when a generated alias is already taken
/// - Mapping storage outcomes onto [`ShortenerError`]
///
/// Uniqueness is left to the repository's insert. The service never checks
/// for an alias before writing it.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            settings: self.settings.clone(),
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_settings(repository, generator, ShortenerSettings::default())
    }

    pub fn with_settings(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            settings,
        }
    }

    /// Validates that the URL is an absolute http(s) URL.
    fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        let parsed =
            Url::parse(url).map_err(|e| ShortenerError::InvalidUrl(format!("{url}: {e}")))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {scheme}"
            ))),
        }
    }

    async fn save_with_generated_alias(&self, url: &str) -> Result<Alias> {
        let attempts = self.settings.max_attempts.max(1);

        for attempt in 1..=attempts {
            let alias = self.generator.generate();

            match self.repository.insert(url, &alias).await {
                Ok(id) => {
                    info!(%alias, id, attempt, "url saved");
                    return Ok(alias);
                }
                Err(StorageError::AliasExists { .. }) => {
                    debug!(%alias, attempt, "generated alias already taken, retrying");
                }
                Err(e) => {
                    error!(error = %err(&e), op = %e.op(), "failed to save url");
                    return Err(e.into());
                }
            }
        }

        warn!(attempts, "gave up generating a free alias");
        Err(ShortenerError::AliasSpaceExhausted { attempts })
    }

    async fn save_with_custom_alias(&self, url: &str, alias: Alias) -> Result<Alias> {
        match self.repository.insert(url, &alias).await {
            Ok(id) => {
                info!(%alias, id, "url saved");
                Ok(alias)
            }
            Err(e @ StorageError::AliasExists { .. }) => {
                info!(%alias, "alias already exists");
                Err(e.into())
            }
            Err(e) => {
                error!(error = %err(&e), op = %e.op(), "failed to save url");
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, url: &str, alias: Option<Alias>) -> Result<Alias> {
        Self::validate_url(url)?;

        match alias {
            Some(alias) => self.save_with_custom_alias(url, alias).await,
            None => self.save_with_generated_alias(url).await,
        }
    }

    async fn resolve(&self, alias: &Alias) -> Result<String> {
        match self.repository.get_by_alias(alias).await {
            Ok(url) => {
                debug!(%alias, %url, "url resolved");
                Ok(url)
            }
            Err(e) if e.is_not_found() => {
                info!(%alias, "url not found");
                Err(e.into())
            }
            Err(e) => {
                error!(error = %err(&e), op = %e.op(), "failed to get url");
                Err(e.into())
            }
        }
    }

    async fn delete(&self, alias: &Alias) -> Result<()> {
        self.repository
            .delete_by_alias(alias)
            .await
            .inspect_err(|e| error!(error = %err(e), op = %e.op(), "failed to delete url"))?;

        info!(%alias, "url deleted");
        Ok(())
    }
}
