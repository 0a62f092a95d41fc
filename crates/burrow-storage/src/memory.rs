use async_trait::async_trait;
use burrow_core::error::{Operation, Result, StorageError};
use burrow_core::repository::{ReadRepository, Repository};
use burrow_core::Alias;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

/// In-memory implementation of the Repository trait using DashMap.
///
/// Mirrors the SQLite contract: ids start at 1 and only grow, an alias
/// holds at most one record, and deletes leave nothing behind. Nothing
/// survives the process.
#[derive(Debug)]
pub struct InMemoryRepository {
    /// alias -> url
    storage: DashMap<String, String>,
    next_id: AtomicI64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get_by_alias(&self, alias: &Alias) -> Result<String> {
        self.storage
            .get(alias.as_str())
            .map(|url| url.value().clone())
            .ok_or_else(|| StorageError::NotFound {
                op: Operation::GetByAlias,
                alias: alias.to_string(),
            })
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, url: &str, alias: &Alias) -> Result<i64> {
        // The entry guard holds the shard lock, so check and insert are atomic.
        match self.storage.entry(alias.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::AliasExists {
                op: Operation::Insert,
                alias: alias.to_string(),
            }),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                slot.insert(url.to_owned());
                debug!(%alias, id, "url saved");
                Ok(id)
            }
        }
    }

    async fn delete_by_alias(&self, alias: &Alias) -> Result<()> {
        let removed = self.storage.remove(alias.as_str()).is_some();
        debug!(%alias, removed, "url deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn alias(s: &str) -> Alias {
        Alias::new_unchecked(s)
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryRepository::new();

        let id = repo
            .insert("https://example.com", &alias("abc123"))
            .await
            .unwrap();
        assert_eq!(id, 1);

        let url = repo.get_by_alias(&alias("abc123")).await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let err = repo.get_by_alias(&alias("nope")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn insert_conflict() {
        let repo = InMemoryRepository::new();

        repo.insert("https://example.com", &alias("abc123"))
            .await
            .unwrap();

        let err = repo
            .insert("https://other.com", &alias("abc123"))
            .await
            .unwrap_err();

        assert!(err.is_alias_exists());
        assert_eq!(
            repo.get_by_alias(&alias("abc123")).await.unwrap(),
            "https://example.com"
        );
    }

    #[tokio::test]
    async fn delete_existing() {
        let repo = InMemoryRepository::new();

        repo.insert("https://example.com", &alias("abc123"))
            .await
            .unwrap();
        repo.delete_by_alias(&alias("abc123")).await.unwrap();

        assert!(repo.get_by_alias(&alias("abc123")).await.unwrap_err().is_not_found());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn delete_nonexistent() {
        let repo = InMemoryRepository::new();

        repo.delete_by_alias(&alias("nope")).await.unwrap();
    }

    #[tokio::test]
    async fn ids_keep_growing_after_delete() {
        let repo = InMemoryRepository::new();

        let first = repo.insert("https://one.example", &alias("one")).await.unwrap();
        repo.delete_by_alias(&alias("one")).await.unwrap();
        let second = repo.insert("https://two.example", &alias("two")).await.unwrap();

        assert_eq!((first, second), (1, 2));
    }

    #[tokio::test]
    async fn concurrent_inserts_of_one_alias_have_a_single_winner() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..16u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(&format!("https://example{i}.com"), &alias("contested"))
                    .await
            }));
        }

        let mut winners = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => winners += 1,
                Err(err) => assert!(err.is_alias_exists()),
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.len(), 1);
    }
}
