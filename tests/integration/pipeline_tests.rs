use crate::support::{credentials, test_config, trending_page, trending_row};
use trending_digest::pipeline::{run_digest, Delivery, Outcome};
use trending_digest::DigestError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(mock_server: &MockServer, html: String) {
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_print_mode_renders_top_ten() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, trending_page(12)).await;

    let config = test_config(&mock_server.uri());
    let outcome = run_digest(&config, Delivery::Print)
        .await
        .expect("Run failed");

    let digest = match outcome {
        Outcome::Printed(digest) => digest,
        other => panic!("Expected printed outcome, got {:?}", other),
    };

    assert_eq!(digest.entries.len(), 10);
    assert_eq!(digest.entries[0].name, "owner/repo1");
    assert_eq!(digest.entries[0].url, "https://github.com/owner/repo1");
    assert_eq!(digest.entries[0].stars, 1000);
    assert_eq!(digest.entries[0].description, "Description 1");
    assert_eq!(digest.entries[9].name, "owner/repo10");

    assert!(digest.html.contains("owner/repo10"));
    assert!(!digest.html.contains("owner/repo11"));
    assert!(digest.html.contains(">10,000</td>"));
    assert!(digest.subject.starts_with("GitHub Trending Daily Top 10 ("));
    assert!(digest.subject.ends_with(" UTC+08:00)"));
}

#[tokio::test]
async fn test_short_result_aborts_before_sending() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, trending_page(3)).await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"never"}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = run_digest(&config, Delivery::Send(credentials("a@x.com"))).await;

    assert!(matches!(
        result,
        Err(DigestError::ShortResult {
            expected: 10,
            found: 3
        })
    ));
}

#[tokio::test]
async fn test_lower_threshold_accepts_short_page() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, trending_page(3)).await;

    let mut config = test_config(&mock_server.uri());
    config.source.min_entries = 3;

    let outcome = run_digest(&config, Delivery::Print).await.expect("Run failed");
    match outcome {
        Outcome::Printed(digest) => assert_eq!(digest.entries.len(), 3),
        other => panic!("Expected printed outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rows_without_titles_count_as_missing() {
    let mock_server = MockServer::start().await;

    let mut rows: Vec<String> = (1..=10)
        .map(|i| trending_row("owner", &format!("repo{i}"), "5", ""))
        .collect();
    rows[4] = r#"<article class="Box-row"><h2>sponsored</h2></article>"#.to_string();
    mount_page(&mock_server, format!("<html><body>{}</body></html>", rows.join(""))).await;

    let config = test_config(&mock_server.uri());
    let result = run_digest(&config, Delivery::Print).await;

    assert!(matches!(
        result,
        Err(DigestError::ShortResult {
            expected: 10,
            found: 9
        })
    ));
}

#[tokio::test]
async fn test_send_mode_delivers_digest() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, trending_page(10)).await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"sent-1"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let outcome = run_digest(&config, Delivery::Send(credentials("a@x.com, b@y.com a@x.com")))
        .await
        .expect("Run failed");

    let (digest, receipt) = match outcome {
        Outcome::Sent { digest, receipt } => (digest, receipt),
        other => panic!("Expected sent outcome, got {:?}", other),
    };
    assert_eq!(receipt.raw, r#"{"id":"sent-1"}"#);

    let requests = mock_server.received_requests().await.unwrap();
    let email = requests
        .iter()
        .find(|r| r.url.path() == "/emails")
        .expect("No email request recorded");
    let body: serde_json::Value = serde_json::from_slice(&email.body).unwrap();

    assert_eq!(body["from"], "digest@example.com");
    assert_eq!(body["to"], serde_json::json!(["a@x.com", "b@y.com"]));
    assert_eq!(body["subject"], digest.subject.as_str());
    assert_eq!(body["html"], digest.html.as_str());
}

#[tokio::test]
async fn test_fetch_failure_aborts_run() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(500))
        .expect(4)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = run_digest(&config, Delivery::Print).await;

    assert!(matches!(result, Err(DigestError::Fetch(_))));
}
