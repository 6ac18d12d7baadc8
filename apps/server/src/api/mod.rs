mod exchange;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api/v1", exchange::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
