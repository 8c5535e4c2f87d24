//! Integration tests for the reqwest transport.
//!
//! These tests serve canned upstream responses from a local axum router
//! and drive the real HTTP adapter against it, in both call modes.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use countries_client::{
    CacheConfig, ClientConfig, HttpTransport, LookupError, LookupService, TransportError,
};

async fn alpha(Path(code): Path<String>) -> Response {
    match code.as_str() {
        "US" => Json(json!({
            "name": "United States of America",
            "alpha2Code": "US",
            "currencies": [{"code": "USD", "name": "United States dollar", "symbol": "$"}]
        }))
        .into_response(),
        "AQ" => Json(json!({"name": "Antarctica"})).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": 404, "message": "Not Found"})),
        )
            .into_response(),
    }
}

async fn capital(Path(capital): Path<String>) -> Response {
    match capital.as_str() {
        "Minsk" => Json(json!([{
            "name": "Belarus",
            "capital": "Minsk",
            "area": 207600.0,
            "population": 9398861,
            "flag": "https://flagcdn.com/by.svg"
        }]))
        .into_response(),
        "Buenos Aires" => Json(json!([{
            "name": {"common": "Argentina"},
            "capital": ["Buenos Aires"],
            "area": 2780400,
            "population": 45376763,
            "flag": "🇦🇷"
        }]))
        .into_response(),
        "Slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([])).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Binds the fixture router on an ephemeral port and returns its base URL.
async fn spawn_fixture_server() -> String {
    let app = Router::new()
        .route("/v2/alpha/{code}", get(alpha))
        .route("/v2/capital/{capital}", get(capital));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v2", addr)
}

#[tokio::test]
async fn test_async_currency_lookup() {
    let base_url = spawn_fixture_server().await;
    let service = LookupService::new(base_url);

    let currency = service
        .local_currency_by_code_async("us", &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(currency.code, "USD");
    assert_eq!(currency.symbol, "$");
}

#[tokio::test]
async fn test_async_capital_lookup_with_encoded_segment() {
    let base_url = spawn_fixture_server().await;
    let service = LookupService::new(base_url);
    let cancel = CancellationToken::new();

    let info = service
        .country_info_by_capital_async("Minsk", &cancel)
        .await
        .unwrap();
    assert_eq!(info.name, "Belarus");

    let info = service
        .country_info_by_capital_async("Buenos Aires", &cancel)
        .await
        .unwrap();
    assert_eq!(info.name, "Argentina");
    assert_eq!(info.capital, "Buenos Aires");
    assert_eq!(info.population, 45376763);
}

#[tokio::test]
async fn test_not_found_maps_to_remote_unavailable() {
    let base_url = spawn_fixture_server().await;
    let service = LookupService::new(base_url);

    let err = service
        .local_currency_by_code_async("ZZ", &CancellationToken::new())
        .await
        .unwrap_err();
    match err {
        LookupError::RemoteUnavailable(TransportError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected RemoteUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_currencies_maps_to_malformed() {
    let base_url = spawn_fixture_server().await;
    let service = LookupService::new(base_url);

    let result = service
        .local_currency_by_code_async("AQ", &CancellationToken::new())
        .await;
    assert!(matches!(result, Err(LookupError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_cancellation_interrupts_slow_exchange() {
    let base_url = spawn_fixture_server().await;
    let service = LookupService::new(base_url);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let started = std::time::Instant::now();
    let result = service.country_info_by_capital_async("Slow", &cancel).await;
    assert!(matches!(result, Err(LookupError::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_timeout_is_retryable() {
    let base_url = spawn_fixture_server().await;
    let transport = HttpTransport::new(Some(Duration::from_millis(100)), "countries-test").unwrap();
    let service = LookupService::with_transport(base_url, transport);

    let err = service
        .country_info_by_capital_async("Slow", &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LookupError::RemoteUnavailable(TransportError::Request(_))
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_from_config_enables_cache() {
    let base_url = spawn_fixture_server().await;
    let config = ClientConfig {
        base_url,
        cache: Some(CacheConfig::new(4)),
        ..ClientConfig::default()
    };
    let service = LookupService::from_config(&config).unwrap();
    let cancel = CancellationToken::new();

    service
        .local_currency_by_code_async("US", &cancel)
        .await
        .unwrap();
    assert_eq!(service.cache().unwrap().len(), 1);
}

// The blocking client must not run on a runtime worker, so the fixture
// server gets its own runtime and the lookups run on the test thread.
#[test]
fn test_blocking_lookups() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let base_url = runtime.block_on(spawn_fixture_server());
    let service = LookupService::new(base_url).with_cache(CacheConfig::new(4));

    let currency = service.local_currency_by_code("US").unwrap();
    assert_eq!(currency.code, "USD");

    let info = service.country_info_by_capital("Minsk").unwrap();
    assert_eq!(info.name, "Belarus");

    let err = service.local_currency_by_code("ZZ").unwrap_err();
    assert!(matches!(
        err,
        LookupError::RemoteUnavailable(TransportError::Status { status: 404, .. })
    ));

    assert!(matches!(
        service.local_currency_by_code("UPSS"),
        Err(LookupError::InvalidArgument(_))
    ));
}
