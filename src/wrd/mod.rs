//! Session-based JSON API of the DNS provider.
//!
//! [`DnsApi`] is the seam between the reconciliation engine and the remote
//! API; [`client::WrdClient`] is the HTTP implementation.
pub mod client;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

use types::{CODE_NO_RECORDS, NativeRecord, STATUS_ERROR, ZoneInfo};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{action} failed with HTTP status {status}")]
    UnexpectedStatus {
        action: String,
        status: reqwest::StatusCode,
    },

    #[error("{action} returned status '{status}' ({code}): {message}")]
    Status {
        action: String,
        status: String,
        code: u32,
        message: String,
    },

    #[error("failed to decode {action} response data: {source}")]
    Decode {
        action: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// True when the API reports that a zone simply has no records.
    pub fn is_empty_zone(&self) -> bool {
        matches!(
            self,
            ApiError::Status { status, code, .. }
                if status == STATUS_ERROR && *code == CODE_NO_RECORDS
        )
    }
}

/// An authenticated API session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Session(<redacted>)")
    }
}

#[async_trait]
pub trait DnsApi: Send + Sync {
    async fn login(&self) -> Result<Session, ApiError>;

    async fn logout(&self, session: &Session) -> Result<(), ApiError>;

    async fn info_dns_zone(&self, session: &Session, zone: &str) -> Result<ZoneInfo, ApiError>;

    async fn info_dns_records(
        &self,
        session: &Session,
        zone: &str,
    ) -> Result<Vec<NativeRecord>, ApiError>;

    /// Creates, updates or deletes (`delete_record`) the given records.
    async fn update_dns_records(
        &self,
        session: &Session,
        zone: &str,
        records: &[NativeRecord],
    ) -> Result<(), ApiError>;
}
