use std::str::FromStr;

use anyhow::{ensure, Context};
use respond_core::pagination::{
    PaginationConfig, RecordLimit, DEFAULT_MAX_PAGE_SIZE, DEFAULT_MAX_RECORDS, DEFAULT_PAGE_SIZE,
};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Limits applied to every paginated listing.
    pub pagination: PaginationConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default   |
    /// |--------------------------------|-----------|
    /// | `HOST`                         | `0.0.0.0` |
    /// | `PORT`                         | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS`         | `30`      |
    /// | `PAGINATION_MAX_PAGE_SIZE`     | `50`      |
    /// | `PAGINATION_MAX_RECORDS`       | `1000` (`-1` = unlimited) |
    /// | `PAGINATION_DEFAULT_PAGE_SIZE` | `10`      |
    /// | `PAGINATION_STRICT_PARAMS`     | `false`   |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 3000)?;
        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let max_records: i64 = parse_or(
            &lookup,
            "PAGINATION_MAX_RECORDS",
            i64::try_from(DEFAULT_MAX_RECORDS)?,
        )?;
        let pagination = PaginationConfig {
            max_page_size: parse_or(&lookup, "PAGINATION_MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE)?,
            max_records: RecordLimit::from_raw(max_records),
            default_page_size: parse_or(
                &lookup,
                "PAGINATION_DEFAULT_PAGE_SIZE",
                DEFAULT_PAGE_SIZE,
            )?,
            raise_on_value_error: parse_or(&lookup, "PAGINATION_STRICT_PARAMS", false)?,
            ..PaginationConfig::default()
        };

        ensure!(
            pagination.max_page_size >= 1,
            "PAGINATION_MAX_PAGE_SIZE must be at least 1"
        );
        if let Some(limit) = pagination.max_records.bound() {
            ensure!(
                pagination.max_page_size <= limit,
                "PAGINATION_MAX_PAGE_SIZE ({}) cannot exceed PAGINATION_MAX_RECORDS ({limit})",
                pagination.max_page_size
            );
        }

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            pagination,
        })
    }
}

fn parse_or<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}
