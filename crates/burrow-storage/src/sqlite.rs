use async_trait::async_trait;
use burrow_core::error::{Operation, Result, StorageError};
use burrow_core::repository::{ReadRepository, Repository};
use burrow_core::Alias;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use typed_builder::TypedBuilder;

// AUTOINCREMENT keeps SQLite from handing out the id of a deleted tail row again.
const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS url (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    alias TEXT UNIQUE NOT NULL,
    url TEXT NOT NULL
)
"#;

const CREATE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url (alias)";

/// Connection settings for [`SqliteRepository`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct SqliteConfig {
    #[builder(default = 5)]
    max_connections: u32,
    /// How long a statement waits on a locked database before failing.
    #[builder(default = Duration::from_secs(5))]
    busy_timeout: Duration,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// SQLite implementation of the repository contract.
///
/// Owns the `url` table. Alias uniqueness is enforced by the table's
/// `UNIQUE` constraint, so concurrent inserts of the same alias resolve to
/// exactly one winner without a read-before-write. Deletes remove the row.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Opens (creating if needed) the database at `location` with default
    /// settings and ensures the schema exists.
    ///
    /// `location` is either a filesystem path or an sqlx SQLite URL such as
    /// `sqlite://data/burrow.db` or `sqlite::memory:`.
    pub async fn open(location: &str) -> Result<Self> {
        Self::open_with(location, SqliteConfig::default()).await
    }

    /// Like [`SqliteRepository::open`] with explicit connection settings.
    pub async fn open_with(location: &str, config: SqliteConfig) -> Result<Self> {
        let options = connect_options(location)
            .await?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(config.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Open {
                op: Operation::Open,
                source: Arc::new(e),
            })?;

        let repository = Self::new(pool);
        repository.init_schema().await?;

        debug!(location, "sqlite store ready");
        Ok(repository)
    }

    /// Wraps an existing pool. The schema is not touched.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `url` table and its alias index if they are missing.
    ///
    /// Safe to run against an already initialized database.
    pub async fn init_schema(&self) -> Result<()> {
        for statement in [CREATE_TABLE, CREATE_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| StorageError::Schema {
                    op: Operation::Open,
                    source: Arc::new(e),
                })?;
        }
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every pooled connection, waiting for in-flight statements.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// sqlx URLs are taken as written, so their `mode=` query decides whether a
/// missing file is created. Plain paths are always created.
async fn connect_options(location: &str) -> Result<SqliteConnectOptions> {
    if location.starts_with("sqlite:") {
        return SqliteConnectOptions::from_str(location).map_err(|e| StorageError::Open {
            op: Operation::Open,
            source: Arc::new(e),
        });
    }

    if let Some(parent) = Path::new(location).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                let context = format!("failed to create directory {}: {e}", parent.display());
                StorageError::Open {
                    op: Operation::Open,
                    source: Arc::new(std::io::Error::new(e.kind(), context)),
                }
            })?;
        }
    }

    Ok(SqliteConnectOptions::new()
        .filename(location)
        .create_if_missing(true))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn read_error(op: Operation) -> impl FnOnce(sqlx::Error) -> StorageError {
    move |err| StorageError::Read {
        op,
        source: Arc::new(err),
    }
}

fn write_error(op: Operation) -> impl FnOnce(sqlx::Error) -> StorageError {
    move |err| StorageError::Write {
        op,
        source: Arc::new(err),
    }
}

#[async_trait]
impl ReadRepository for SqliteRepository {
    async fn get_by_alias(&self, alias: &Alias) -> Result<String> {
        let op = Operation::GetByAlias;

        let row = sqlx::query("SELECT url FROM url WHERE alias = ?")
            .bind(alias.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error(op))?;

        let Some(row) = row else {
            return Err(StorageError::NotFound {
                op,
                alias: alias.to_string(),
            });
        };

        row.try_get("url").map_err(read_error(op))
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn insert(&self, url: &str, alias: &Alias) -> Result<i64> {
        let op = Operation::Insert;

        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias.as_str())
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                debug!(%alias, id, "url saved");
                Ok(id)
            }
            Err(err) if is_unique_violation(&err) => Err(StorageError::AliasExists {
                op,
                alias: alias.to_string(),
            }),
            Err(err) => Err(write_error(op)(err)),
        }
    }

    async fn delete_by_alias(&self, alias: &Alias) -> Result<()> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias.as_str())
            .execute(&self.pool)
            .await
            .map_err(write_error(Operation::DeleteByAlias))?;

        debug!(%alias, removed = result.rows_affected(), "url deleted");
        Ok(())
    }
}
