use thiserror::Error;

/// Errors surfaced by the read-model layer.
///
/// Lookups by id never produce an error on a miss; they return
/// `Ok(None)`/empty collections so callers can render a "not found" state
/// without exception handling. These variants cover genuine failures only:
/// transport problems against a remote data source, malformed payloads, and
/// invariant violations caught by validation.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("remote data source request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("remote data source returned status {0}")]
    RemoteStatus(u16),
    #[error("failed to deserialize payload: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("duplicate display name breaks name-based joins: {0}")]
    DuplicateDisplayName(String),
}

pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
