use std::time::Duration;
use trending_digest::config::{RetryConfig, UserAgentConfig};
use trending_digest::scrape::{build_http_client, fetch_page};
use trending_digest::FetchError;
use wiremock::matchers::{header, headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_retries: 3,
        backoff_factor: 0.0,
        backoff_max_seconds: 120,
    }
}

fn client() -> reqwest::Client {
    build_http_client(&UserAgentConfig::default(), Duration::from_secs(5))
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_sends_declared_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending"))
        .and(header("user-agent", "daily-trending-bot/1.0 (+https://github.com)"))
        // wiremock splits comma separated values into a list
        .and(headers(
            "accept",
            vec!["text/html", "application/xhtml+xml", "application/xml;q=0.9", "*/*;q=0.8"],
        ))
        .and(headers("accept-language", vec!["en-US", "en;q=0.9"]))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/trending", mock_server.uri());
    let body = fetch_page(&client(), &url, &fast_retry())
        .await
        .expect("Fetch failed");

    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn test_retries_transient_statuses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>third time</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/trending", mock_server.uri());
    let body = fetch_page(&client(), &url, &fast_retry())
        .await
        .expect("Fetch should succeed after retries");

    assert_eq!(body, "<html>third time</html>");
}

#[tokio::test]
async fn test_gives_up_after_max_retries() {
    let mock_server = MockServer::start().await;

    // One initial attempt plus three retries
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(502))
        .expect(4)
        .mount(&mock_server)
        .await;

    let url = format!("{}/trending", mock_server.uri());
    let result = fetch_page(&client(), &url, &fast_retry()).await;

    match result {
        Err(FetchError::Status {
            status, attempts, ..
        }) => {
            assert_eq!(status, 502);
            assert_eq!(attempts, 4);
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/trending", mock_server.uri());
    let result = fetch_page(&client(), &url, &fast_retry()).await;

    assert!(matches!(
        result,
        Err(FetchError::Status {
            status: 404,
            attempts: 1,
            ..
        })
    ));
}

#[tokio::test]
async fn test_connection_refused_is_retried_then_fails() {
    // Reserve a port, then free it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);

    let url = format!("http://127.0.0.1:{}/trending", port);
    let retry = RetryConfig {
        max_retries: 2,
        ..fast_retry()
    };
    let result = fetch_page(&client(), &url, &retry).await;

    match result {
        Err(FetchError::Transport { attempts, .. }) => assert_eq!(attempts, 3),
        other => panic!("Expected transport error, got {:?}", other),
    }
}
