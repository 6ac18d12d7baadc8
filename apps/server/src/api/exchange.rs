use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, AppState};

/// Query parameters are all structurally optional; the conversion service
/// decides what a missing value means.
#[derive(Deserialize)]
struct ExchangeQuery {
    #[serde(default)]
    source: String,
    #[serde(default)]
    target: String,
    #[serde(default)]
    amount: String,
}

#[derive(Serialize)]
struct ExchangeResponse {
    msg: &'static str,
    amount: String,
}

/// Convert a symbol-prefixed amount from `source` to `target` currency.
async fn convert(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ExchangeQuery>,
) -> ApiResult<Json<ExchangeResponse>> {
    let amount = state
        .exchange_service
        .convert(&q.source, &q.target, &q.amount)?;
    Ok(Json(ExchangeResponse {
        msg: "success",
        amount,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/exchange", get(convert))
}
