mod cli;

use crate::cli::{Command, CLI};
use anyhow::Context;
use burrow_core::Alias;
use burrow_generator::RandomGenerator;
use burrow_shortener::{Shortener, ShortenerService, ShortenerSettings};
use burrow_storage::SqliteRepository;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    burrow_telemetry::init(config.log_format.into(), &config.log_level)?;

    info!(
        storage_path = %config.storage_path,
        alias_length = config.alias_length,
        max_attempts = config.max_attempts,
        log_format = %config.log_format,
        "starting burrow"
    );

    let repository = SqliteRepository::open(&config.storage_path)
        .await
        .with_context(|| format!("failed to open storage at {}", config.storage_path))?;

    let generator = RandomGenerator::new(config.alias_length)?;
    let service = ShortenerService::with_settings(
        repository.clone(),
        generator,
        ShortenerSettings::builder()
            .max_attempts(config.max_attempts)
            .build(),
    );

    let outcome = run(&service, config.command, config.base_url.as_deref()).await;
    repository.close().await;
    outcome
}

async fn run(
    service: &impl Shortener,
    command: Command,
    base_url: Option<&str>,
) -> anyhow::Result<()> {
    match command {
        Command::Save { url, alias } => {
            let alias = alias.map(Alias::new).transpose()?;
            let alias = service.shorten(&url, alias).await?;
            match base_url {
                Some(base_url) => println!("{}", alias.to_url(base_url)),
                None => println!("{alias}"),
            }
        }
        Command::Get { alias } => {
            let url = service.resolve(&Alias::new(alias)?).await?;
            println!("{url}");
        }
        Command::Delete { alias } => {
            service.delete(&Alias::new(alias)?).await?;
        }
    }

    Ok(())
}
