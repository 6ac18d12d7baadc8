use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use quickfx_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

fn test_router() -> axum::Router {
    let config = Config::from_env();
    app_router(build_state(&config))
}

fn exchange_uri(source: &str, target: &str, amount: &str) -> String {
    let query = serde_urlencoded::to_string([
        ("source", source),
        ("target", target),
        ("amount", amount),
    ])
    .unwrap();
    format!("/api/v1/exchange?{query}")
}

async fn get_json(uri: &str) -> (u16, serde_json::Value) {
    let response = test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn converts_usd_to_jpy() {
    // 1234.56 * 111.801 = 138025.04256, rounded half-up to 138025.04
    let (status, body) = get_json(&exchange_uri("USD", "JPY", "$1,234.56")).await;
    assert_eq!(status, 200);
    assert_eq!(body["msg"], "success");
    assert_eq!(body["amount"], "¥138,025.04");
}

#[tokio::test]
async fn converts_twd_to_usd() {
    let (status, body) = get_json(&exchange_uri("TWD", "USD", "$1,000")).await;
    assert_eq!(status, 200);
    assert_eq!(body["msg"], "success");
    assert_eq!(body["amount"], "$32.81");
}

#[tokio::test]
async fn rejects_unsupported_source_currency() {
    let (status, body) = get_json(&exchange_uri("EUR", "USD", "$100")).await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "error");
    assert_eq!(body["message"], "The source currency is not supported");
}

#[tokio::test]
async fn rejects_unsupported_target_currency() {
    let (status, body) = get_json(&exchange_uri("USD", "CNY", "$100")).await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "error");
    assert_eq!(body["message"], "The target currency is not supported");
}

#[tokio::test]
async fn rejects_malformed_amount() {
    let (status, body) = get_json(&exchange_uri("JPY", "USD", "abc")).await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "error");
    assert_eq!(body["message"], "Invalid amount format");
}

#[tokio::test]
async fn rejects_symbol_of_another_currency() {
    let (status, body) = get_json(&exchange_uri("USD", "JPY", "¥100")).await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "error");
    assert_eq!(
        body["message"],
        "Currency symbol is not match source currency"
    );
}

#[tokio::test]
async fn overflowing_amount_returns_error_envelope() {
    // Large enough that amount * rate exceeds Decimal range; the handler
    // must still answer with the JSON envelope rather than panic.
    let uri = exchange_uri("USD", "JPY", "$79,228,162,514,264,337,593,543,950,335");
    let (status, body) = get_json(&uri).await;
    assert_eq!(status, 500);
    assert_eq!(body["msg"], "error");
}

#[tokio::test]
async fn missing_parameters_fail_currency_validation() {
    let (status, body) = get_json("/api/v1/exchange").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "error");
    assert_eq!(body["message"], "The source currency is not supported");
}
