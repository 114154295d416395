//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into
//! services, so request handling never reads process-wide environment
//! variables. That keeps behaviour consistent across multi-threaded
//! runtimes and test harnesses.

use std::time::Duration;

use crate::{DashboardError, DashboardResult};

/// Default TTL for cached non-PII aggregate responses.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Which raw data source backs the read-model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSourceMode {
    /// In-memory seed dataset; the default for development and tests.
    Static,
    /// Remote CRUD API reachable over HTTP, rooted at this base URL.
    Remote(String),
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_source: DataSourceMode,
    cache_ttl: Duration,
}

impl CoreConfig {
    pub fn new(data_source: DataSourceMode, cache_ttl: Duration) -> DashboardResult<Self> {
        if cache_ttl.is_zero() {
            return Err(DashboardError::InvalidInput(
                "cache_ttl must be greater than zero".into(),
            ));
        }
        Ok(Self {
            data_source,
            cache_ttl,
        })
    }

    pub fn data_source(&self) -> &DataSourceMode {
        &self.data_source
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }
}

/// Parse the data-source mode from an optional env value.
///
/// `None`, empty, or `"static"` selects the in-memory dataset; an
/// `http(s)://` URL selects the remote CRUD API; anything else is rejected.
pub fn data_source_from_env_value(value: Option<String>) -> DashboardResult<DataSourceMode> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None | Some("static") => Ok(DataSourceMode::Static),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
            Ok(DataSourceMode::Remote(url.trim_end_matches('/').to_string()))
        }
        Some(other) => Err(DashboardError::InvalidInput(format!(
            "WARDBOARD_DATA_SOURCE must be \"static\" or an http(s) URL, got {other:?}"
        ))),
    }
}

/// Parse the cache TTL in seconds from an optional env value.
///
/// `None` or empty falls back to [`DEFAULT_CACHE_TTL`].
pub fn cache_ttl_from_env_value(value: Option<String>) -> DashboardResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_CACHE_TTL),
        Some(raw) => {
            let secs: u64 = raw.parse().map_err(|_| {
                DashboardError::InvalidInput(format!(
                    "WARDBOARD_CACHE_TTL_SECS must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            if secs == 0 {
                return Err(DashboardError::InvalidInput(
                    "WARDBOARD_CACHE_TTL_SECS must be greater than zero".into(),
                ));
            }
            Ok(Duration::from_secs(secs))
        }
    }
}
