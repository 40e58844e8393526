use crate::helpers::{fast_client, refused_url};

use primer_core::config::HttpConfig;
use primer_core::http::{HttpClient, RequestOptions, RetryPolicy};

use std::time::{Duration, Instant};

use tokio::time::timeout as TokioTimeout;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Retry behaviour against a flaky mock server
// ============================================================================

/// **VALUE**: Verifies a GET that fails twice with 503 succeeds on the third try.
///
/// **WHY THIS MATTERS**: Transient 5xx responses are common behind load
/// balancers; the caller should never see them when a retry would succeed.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one in the retry counter or
/// the retry loop returning the first 503.
#[tokio::test]
async fn given_two_503s_then_200_when_get_then_succeeds_after_retries() {
    // GIVEN: Two failures ahead of a success
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: GET with three retries allowed
    let response = fast_client(3)
        .get(&server.uri(), RequestOptions::new())
        .await
        .unwrap();

    // THEN: Final answer is the success
    assert_eq!(response.status().0, 200);
}

#[tokio::test]
async fn given_persistent_503_when_retries_exhausted_then_last_response_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let response = fast_client(2)
        .get(&server.uri(), RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(response.status().0, 503);
    assert_eq!(response.raise_for_status().unwrap_err().status_code(), Some(503));
}

/// **VALUE**: Verifies POST is sent exactly once even on a retryable status.
///
/// **BUG THIS CATCHES**: Duplicate side effects from retrying a non-idempotent call.
#[tokio::test]
async fn given_post_with_503_when_sent_then_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let response = fast_client(3)
        .post(&server.uri(), RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(response.status().0, 503);
}

#[tokio::test]
async fn given_404_when_get_then_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let response = fast_client(3)
        .get(&server.uri(), RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(response.status().0, 404);
}

/// **VALUE**: Verifies `Retry-After` replaces the computed backoff.
///
/// **WHY THIS MATTERS**: A 429 with `Retry-After: 0` means "go ahead now";
/// waiting the full backoff instead would stall the caller for no reason.
#[tokio::test]
async fn given_retry_after_zero_when_429_then_retried_without_backoff_wait() {
    // GIVEN: A client whose computed backoff would be 30 seconds
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let config = HttpConfig::default();
    let client = HttpClient::new(&config).unwrap().with_retry_policy(RetryPolicy {
        max_retries: 1,
        backoff_factor: Duration::from_secs(30),
        backoff_max: Duration::from_secs(60),
        ..RetryPolicy::default()
    });

    // WHEN: The request is sent
    let response = TokioTimeout(
        Duration::from_secs(10),
        client.get(&server.uri(), RequestOptions::new()),
    )
    .await
    .expect("Retry-After should have replaced the 30s backoff");

    // THEN: Retried promptly and succeeded
    assert_eq!(response.unwrap().status().0, 200);
}

/// **VALUE**: Verifies a `Retry-After` retry still counts toward the exponential schedule.
///
/// **WHY THIS MATTERS**: The delay before retry `n` is `factor * 2^(n-1)`. A
/// header on an earlier response must not reset that sequence.
///
/// **BUG THIS CATCHES**: Would catch the schedule advancing only when no
/// header was honoured, so the second retry waits `factor` instead of `2 * factor`.
#[tokio::test]
async fn given_retry_after_then_plain_503_when_get_then_second_wait_doubles() {
    // GIVEN: 503 with Retry-After: 0, then a bare 503, then success
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(2)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(3)
        .expect(1)
        .mount(&server)
        .await;
    let factor = Duration::from_millis(300);
    let client = HttpClient::new(&HttpConfig::default())
        .unwrap()
        .with_retry_policy(RetryPolicy {
            max_retries: 2,
            backoff_factor: factor,
            backoff_max: Duration::from_secs(10),
            ..RetryPolicy::default()
        });

    // WHEN: The request is sent
    let started = Instant::now();
    let response = client
        .get(&server.uri(), RequestOptions::new())
        .await
        .unwrap();
    let elapsed = started.elapsed();

    // THEN: Zero wait, then 2 * factor
    assert_eq!(response.status().0, 200);
    assert!(
        elapsed >= factor * 2,
        "second retry waited only {elapsed:?}"
    );
}

#[tokio::test]
async fn given_refused_connection_when_retries_exhausted_then_connection_error() {
    let err = fast_client(2)
        .get(&refused_url(), RequestOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.error_category(), "connection");
    assert!(err.is_transient());
}
