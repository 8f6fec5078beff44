use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use axum::http::HeaderValue;

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-field lines (default).
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => bail!("unknown log format '{other}', expected 'pretty' or 'json'"),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL (read separately in `main`) have
/// defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Apply embedded migrations at startup (default: `false`).
    pub run_migrations: bool,
    /// TTF font for the acceptance act. Unset means the built-in font.
    pub document_font_path: Option<PathBuf>,
    /// Directory with the admin UI, served at `/` when set.
    pub static_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:8000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `RUN_MIGRATIONS`       | `false`                    |
    /// | `DOCUMENT_FONT_PATH`   | unset                      |
    /// | `STATIC_DIR`           | unset                      |
    /// | `LOG_FORMAT`           | `pretty`                   |
    ///
    /// Malformed values are reported as errors rather than replaced by
    /// defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env_or("PORT", "8000")?;

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:8000".into()),
        )?;

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")?;
        let db_max_connections: u32 = env_or("DB_MAX_CONNECTIONS", "10")?;
        let run_migrations: bool = env_or("RUN_MIGRATIONS", "false")?;
        let log_format: LogFormat = env_or("LOG_FORMAT", "pretty")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            run_migrations,
            document_font_path: env_path("DOCUMENT_FONT_PATH"),
            static_dir: env_path("STATIC_DIR"),
            log_format,
        })
    }
}

/// Read `key` and parse it, falling back to `default` when unset.
fn env_or<T>(key: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.into());
    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("{key} has an invalid value '{raw}'"))
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Split a comma-separated origin list, rejecting entries that are not
/// valid header values.
///
/// `*` is rejected too: the CORS layer sends credentials, which browsers
/// refuse to combine with a wildcard origin.
fn parse_origins(raw: &str) -> anyhow::Result<Vec<String>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            if origin == "*" {
                bail!("CORS_ORIGINS must list explicit origins, '*' is not allowed");
            }
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin '{origin}'"))?;
            Ok(origin.to_string())
        })
        .collect()
}
