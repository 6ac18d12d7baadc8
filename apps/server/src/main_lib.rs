pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use quickfx_core::exchange::{ExchangeService, RateTable};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub exchange_service: Arc<ExchangeService>,
}

pub fn init_tracing() {
    let log_format = std::env::var("QFX_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the shared application state. The rate table is fixed for the
/// lifetime of the process, so everything here is immutable.
pub fn build_state(_config: &Config) -> Arc<AppState> {
    let exchange_service = Arc::new(ExchangeService::new(RateTable::builtin()));
    Arc::new(AppState { exchange_service })
}
