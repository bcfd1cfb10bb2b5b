//! Integration tests for the retrying fetcher
//!
//! Mock expectations are verified when each server is dropped, so every
//! `.expect(n)` below asserts the exact number of attempts made.

use motospec::crawler::{build_http_client, fetch_url, FetchResult, Fetcher};
use motospec::config::ScrapingConfig;
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(max_retries: u32, delay_seconds: f64) -> ScrapingConfig {
    ScrapingConfig {
        base_url: "http://localhost".to_string(),
        catalog_path: "/".to_string(),
        user_agent: "TestCrawler/1.0".to_string(),
        request_delay_seconds: delay_seconds,
        max_retries,
        timeout_seconds: 5,
    }
}

#[tokio::test]
async fn test_success_on_first_attempt() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&create_test_config(3, 0.0)).unwrap();
    let body = fetcher.fetch(&format!("{}/page", mock_server.uri())).await;

    assert_eq!(body.as_deref(), Some("<html>ok</html>"));
}

#[tokio::test]
async fn test_exhausts_every_attempt_on_server_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&create_test_config(3, 0.0)).unwrap();
    let body = fetcher.fetch(&format!("{}/broken", mock_server.uri())).await;

    assert!(body.is_none());
}

#[tokio::test]
async fn test_not_found_is_retried_like_any_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&create_test_config(2, 0.0)).unwrap();
    assert!(fetcher
        .fetch(&format!("{}/missing", mock_server.uri()))
        .await
        .is_none());
}

#[tokio::test]
async fn test_recovers_after_transient_failure() {
    let mock_server = MockServer::start().await;

    // First request fails, later ones succeed
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&create_test_config(3, 0.0)).unwrap();
    let body = fetcher.fetch(&format!("{}/flaky", mock_server.uri())).await;

    assert_eq!(body.as_deref(), Some("recovered"));
}

#[tokio::test]
async fn test_delay_precedes_every_attempt() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&create_test_config(2, 0.1)).unwrap();
    let started = Instant::now();
    fetcher.fetch(&format!("{}/slow", mock_server.uri())).await;

    assert!(started.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", "TestCrawler/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config(1, 0.0)).unwrap();
    let result = fetch_url(&client, &format!("{}/ua", mock_server.uri())).await;

    match result {
        FetchResult::Success {
            status_code, body, ..
        } => {
            assert_eq!(status_code, 200);
            assert_eq!(body, "hello");
        }
        other => panic!("Expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_classification() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config(1, 0.0)).unwrap();
    let result = fetch_url(&client, &format!("{}/gone", mock_server.uri())).await;

    assert!(matches!(result, FetchResult::HttpError { status_code: 410 }));
    assert!(!result.is_success());
}
