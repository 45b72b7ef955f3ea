pub mod dns;

use axum::{
    Extension, Json, Router,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::SharedState;

/// Media type of the external-dns webhook protocol.
pub const WEBHOOK_MEDIA_TYPE: &str = "application/external.dns.webhook+json;version=1";

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(negotiate))
        .route("/healthz", get(healthz))
        .route("/records", get(dns::get_records).post(dns::apply_changes))
        .route("/adjustendpoints", post(dns::adjust_endpoints))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// JSON response carrying the webhook media type.
pub(crate) fn webhook_json<T: Serialize>(value: T) -> Response {
    (
        [(header::CONTENT_TYPE, WEBHOOK_MEDIA_TYPE)],
        Json(value),
    )
        .into_response()
}

#[derive(Serialize)]
struct DomainFilterDto<'a> {
    include: &'a [String],
}

// GET /
async fn negotiate(Extension(state): Extension<SharedState>) -> Response {
    webhook_json(DomainFilterDto {
        include: state.provider.domain_filter().zones(),
    })
}

// GET /healthz
async fn healthz() -> &'static str {
    "ok"
}
