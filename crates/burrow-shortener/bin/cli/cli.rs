use burrow_core::MAX_ALIAS_LENGTH;
use burrow_generator::DEFAULT_ALIAS_LENGTH;
use burrow_telemetry::LogFormat;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::{Display, Formatter};

pub const STORAGE_PATH_ENV: &str = "BURROW_STORAGE_PATH";
pub const ALIAS_LENGTH_ENV: &str = "BURROW_ALIAS_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "BURROW_MAX_ATTEMPTS";
pub const BASE_URL_ENV: &str = "BURROW_BASE_URL";
pub const LOG_FORMAT_ENV: &str = "BURROW_LOG_FORMAT";
pub const LOG_LEVEL_ENV: &str = "BURROW_LOG_LEVEL";

pub const DEFAULT_STORAGE_PATH: &str = "./storage/storage.db";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Pretty => write!(f, "pretty"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "burrow", about = "Save, look up and delete short URL aliases")]
pub struct CLI {
    /// SQLite database path or sqlx SQLite URL.
    #[arg(long, global = true, env = STORAGE_PATH_ENV, default_value = DEFAULT_STORAGE_PATH)]
    pub storage_path: String,

    /// Length of generated aliases, at most the longest alias `get` accepts.
    #[arg(
        long,
        global = true,
        env = ALIAS_LENGTH_ENV,
        default_value_t = DEFAULT_ALIAS_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_ALIAS_LENGTH as u64)
    )]
    pub alias_length: usize,

    /// Generated aliases to try before giving up on a save.
    #[arg(long, global = true, env = MAX_ATTEMPTS_ENV, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Public base URL; when set, `save` prints the full short URL.
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    #[arg(
        long,
        global = true,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    pub log_format: LogFormatArg,

    /// Default tracing filter directive, overridden by `RUST_LOG`.
    #[arg(long, global = true, env = LOG_LEVEL_ENV, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a URL, under the given alias or a generated one.
    Save {
        url: String,
        #[arg(long)]
        alias: Option<String>,
    },
    /// Print the URL stored under an alias.
    Get { alias: String },
    /// Remove the URL stored under an alias.
    Delete { alias: String },
}
