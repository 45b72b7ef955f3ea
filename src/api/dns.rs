// src/api/dns.rs
use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::webhook_json;
use crate::SharedState;
use crate::endpoint::{Changes, Endpoint};
use crate::error::AppError;

// GET /records
pub async fn get_records(Extension(state): Extension<SharedState>) -> Result<Response, AppError> {
    let endpoints = state.provider.records().await?;
    Ok(webhook_json(endpoints))
}

// POST /records
pub async fn apply_changes(
    Extension(state): Extension<SharedState>,
    body: Result<Json<Changes>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(changes) = body.map_err(|e| AppError::bad_request(e.body_text()))?;
    state.provider.apply_changes(&changes).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

// POST /adjustendpoints
pub async fn adjust_endpoints(
    body: Result<Json<Vec<Endpoint>>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(endpoints) = body.map_err(|e| AppError::bad_request(e.body_text()))?;
    Ok(webhook_json(endpoints))
}
