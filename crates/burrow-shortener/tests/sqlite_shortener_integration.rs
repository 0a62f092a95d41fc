use burrow_core::Alias;
use burrow_generator::RandomGenerator;
use burrow_shortener::{Shortener, ShortenerError, ShortenerService, ShortenerSettings};
use burrow_storage::SqliteRepository;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

async fn service(
    dir: &TempDir,
    alias_length: usize,
    max_attempts: u32,
) -> ShortenerService<SqliteRepository, RandomGenerator<StdRng>> {
    let path = dir.path().join("storage.db");
    let repository = SqliteRepository::open(&path.to_string_lossy())
        .await
        .expect("open sqlite store");

    ShortenerService::with_settings(
        repository,
        RandomGenerator::with_rng(StdRng::seed_from_u64(2024), alias_length)
            .expect("alias length within bounds"),
        ShortenerSettings::builder().max_attempts(max_attempts).build(),
    )
}

#[tokio::test]
async fn generated_aliases_round_trip_through_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir, 8, 5).await;

    let mut aliases = Vec::new();
    for i in 0..20 {
        let url = format!("https://example.com/page/{i}");
        let alias = service.shorten(&url, None).await.unwrap();
        assert_eq!(alias.as_str().len(), 8);
        aliases.push((alias, url));
    }

    for (alias, url) in &aliases {
        assert_eq!(&service.resolve(alias).await.unwrap(), url);
    }
}

#[tokio::test]
async fn custom_alias_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir, 6, 5).await;
    let alias = Alias::new("abc123").unwrap();

    service
        .shorten("https://example.com", Some(alias.clone()))
        .await
        .unwrap();
    assert_eq!(service.resolve(&alias).await.unwrap(), "https://example.com");

    let err = service
        .shorten("https://other.com", Some(alias.clone()))
        .await
        .unwrap_err();
    assert!(matches!(err, ShortenerError::AliasConflict(_)));

    service.delete(&alias).await.unwrap();
    let err = service.resolve(&alias).await.unwrap_err();
    assert!(matches!(err, ShortenerError::NotFound(_)));

    service.delete(&alias).await.unwrap();
}

#[tokio::test]
async fn tiny_alias_space_is_eventually_exhausted() {
    let dir = tempfile::tempdir().unwrap();
    // One character gives 62 possible aliases.
    let service = service(&dir, 1, 3).await;

    let mut exhausted = false;
    for i in 0..200 {
        match service.shorten(&format!("https://example.com/{i}"), None).await {
            Ok(_) => {}
            Err(ShortenerError::AliasSpaceExhausted { attempts }) => {
                assert_eq!(attempts, 3);
                exhausted = true;
                break;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert!(exhausted);
}
