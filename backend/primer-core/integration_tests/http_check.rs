use crate::helpers::{fast_client, refused_url};

use primer_core::http::{UrlCheck, check_urls};

use wiremock::matchers::path;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies each URL is classified as success, HTTP error or other.
///
/// **WHY THIS MATTERS**: The check report distinguishes "the server said no"
/// from "we never got an answer"; mixing them up hides outages.
#[tokio::test]
async fn given_mixed_urls_when_checked_then_each_classified() {
    // GIVEN: One good path and one missing path
    let server = MockServer::start().await;
    Mock::given(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let urls = vec![
        format!("{}/ok", server.uri()),
        format!("{}/missing", server.uri()),
        refused_url(),
        String::from("::not a url::"),
    ];

    // WHEN: Checking them in order
    let results = check_urls(&fast_client(0), &urls).await;

    // THEN: Order kept, outcomes classified
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].0, urls[0]);
    assert!(results[0].1.is_success());
    match &results[1].1 {
        UrlCheck::HttpStatus(err) => assert_eq!(err.status_code(), Some(404)),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert!(matches!(results[2].1, UrlCheck::Other(_)));
    assert!(matches!(results[3].1, UrlCheck::Other(_)));
}
