// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::endpoint::ChangeKind;
use crate::validation::ValidationError;
use crate::wrd::ApiError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("wrd provider requires at least one configured domain in the domain filter")]
    EmptyDomainFilter,

    #[error("zone '{0}' is listed more than once in the domain filter")]
    DuplicateZone(String),

    #[error("invalid zone '{zone}' in domain filter: {source}")]
    InvalidZone {
        zone: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unable to open API session: {0}")]
    Session(#[source] ApiError),

    #[error("unable to query DNS zone info for domain '{zone}': {source}")]
    ZoneInfo {
        zone: String,
        #[source]
        source: ApiError,
    },

    #[error("unable to convert TTL '{ttl}' of zone '{zone}' to an unsigned integer")]
    InvalidZoneTtl {
        zone: String,
        ttl: String,
    },

    #[error("unable to get DNS records for domain '{zone}': {source}")]
    ZoneRecords {
        zone: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to submit {stage} records for zone '{zone}': {source}")]
    Submission {
        zone: String,
        stage: ChangeKind,
        #[source]
        source: ApiError,
    },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponseBody {
    pub error: String,
}

/// Error returned by webhook handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Provider(err) => {
                tracing::error!(error = %err, "provider operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(ErrorResponseBody { error: msg });
        (status, body).into_response()
    }
}
