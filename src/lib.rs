//! Crate entrypoint wiring together configuration, the DNS API client, the
//! reconciliation engine, and the webhook API.

pub mod api;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod provider;
pub mod record;
pub mod validation;
pub mod wrd;
pub mod zone;

use provider::WrdProvider;

use std::sync::Arc;

/// Complete application dependencies shared across handlers.
pub struct AppState {
    pub provider: WrdProvider,
}

/// Arc-wrapped version of `AppState` passed into Axum extensions.
pub type SharedState = Arc<AppState>;
