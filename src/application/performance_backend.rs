// Backend trait for the performance REST API
use crate::domain::user::UserFilter;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failures at the fetch boundary. Malformed payloads are not errors; they
/// normalize to empty results further in.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not JSON: {message}")]
    Decode { url: String, message: String },
}

impl BackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::Status { status: 404, .. })
    }
}

/// Raw payloads per endpoint, in whatever shape the backend chose to send
#[async_trait]
pub trait PerformanceBackend: Send + Sync {
    async fn race_cards(&self, limit: usize) -> Result<Value, BackendError>;

    async fn race_table(&self) -> Result<Value, BackendError>;

    async fn race_detail(&self, race_id: i64) -> Result<Value, BackendError>;

    /// Per-member issue status counters for a race
    async fn members_status(&self, race_id: i64) -> Result<Value, BackendError>;

    async fn ranking(&self, race_id: i64) -> Result<Value, BackendError>;

    /// Races a user took part in, one row per race
    async fn user_race_table(&self, user_id: i64) -> Result<Value, BackendError>;

    async fn daily(&self, user_id: i64, race_id: i64) -> Result<Value, BackendError>;

    async fn race_trend(&self, year: Option<i32>, month: Option<u32>) -> Result<Value, BackendError>;

    async fn users(&self, filter: &UserFilter) -> Result<Value, BackendError>;

    async fn total_users(&self) -> Result<Value, BackendError>;

    async fn assignees(&self) -> Result<Value, BackendError>;
}
