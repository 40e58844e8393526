use crate::helpers::{DigestAnswer, fast_client};

use primer_core::DEFAULT_USER_AGENT;
use primer_core::http::{Auth, RequestOptions};

use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for HttpClient against a local mock server
// ============================================================================

/// **VALUE**: Verifies query parameters and custom headers reach the server.
///
/// **WHY THIS MATTERS**: Params are appended to the URL in order; a lost or
/// re-encoded parameter silently changes what the server returns.
///
/// **BUG THIS CATCHES**: Would catch params dropped when headers are also set,
/// or the default user agent being overwritten.
#[tokio::test]
async fn given_params_and_headers_when_get_then_server_sees_both() {
    // GIVEN: A server that only answers the exact request
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust lang"))
        .and(query_param("page", "2"))
        .and(header("x-trace", "abc"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hits": 3})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Sending the GET
    let options = RequestOptions::new()
        .with_params([("q", "rust lang"), ("page", "2")])
        .with_header("X-Trace", "abc");
    let response = fast_client(0)
        .get(&format!("{}/search", server.uri()), options)
        .await
        .unwrap();

    // THEN: Matched and decoded
    assert_eq!(response.status().0, 200);
    let body: Value = response.json().unwrap();
    assert_eq!(body["hits"], 3);
    assert!(response.url().as_str().contains("q=rust+lang"));
}

#[tokio::test]
async fn given_json_body_when_post_then_sent_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "widget", "count": 2})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let response = fast_client(0)
        .post(
            &format!("{}/items", server.uri()),
            RequestOptions::new().with_json(json!({"name": "widget", "count": 2})),
        )
        .await
        .unwrap();

    assert_eq!(response.status().0, 201);
    assert_eq!(response.reason(), "Created");
}

#[tokio::test]
async fn given_form_fields_when_post_then_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("name=Ada+Lovelace&lang=rust"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = fast_client(0)
        .post(
            &server.uri(),
            RequestOptions::new().with_form([("name", "Ada Lovelace"), ("lang", "rust")]),
        )
        .await
        .unwrap();

    assert!(response.is_success());
}

/// **VALUE**: Verifies basic and bearer credentials are sent up front.
#[tokio::test]
async fn given_basic_or_bearer_auth_when_get_then_authorization_header_sent() {
    let server = MockServer::start().await;
    Mock::given(path("/basic"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path("/bearer"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let client = fast_client(0);

    let basic = client
        .get(
            &format!("{}/basic", server.uri()),
            RequestOptions::new().with_auth(Auth::basic("user", "pass")),
        )
        .await
        .unwrap();
    let bearer = client
        .get(
            &format!("{}/bearer", server.uri()),
            RequestOptions::new().with_auth(Auth::bearer("tok-123")),
        )
        .await
        .unwrap();

    assert_eq!(basic.status().0, 200);
    assert_eq!(bearer.status().0, 200);
}

/// **VALUE**: Verifies the digest flow: challenge, then one authenticated retry.
///
/// **WHY THIS MATTERS**: Digest credentials cannot be sent up front; the
/// client must read the nonce from the 401 and answer it.
///
/// **BUG THIS CATCHES**: Would catch the 401 being returned to the caller
/// without answering, or the answer missing the realm/nonce/uri echo.
#[tokio::test]
async fn given_digest_challenge_when_get_then_answered_once() {
    const CHALLENGE: &str =
        r#"Digest realm="me@example.com", nonce="abc123", qop="auth", opaque="xyz", algorithm=MD5"#;

    // GIVEN: 401 with a challenge unless the correct Digest answer is present
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/digest-auth/auth/user/pass"))
        .and(DigestAnswer {
            challenge: CHALLENGE,
            username: "user",
            password: "pass",
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authenticated": true})))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/digest-auth/auth/user/pass"))
        .respond_with(ResponseTemplate::new(401).insert_header("www-authenticate", CHALLENGE))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: GET with digest credentials
    let response = fast_client(0)
        .get(
            &format!("{}/digest-auth/auth/user/pass", server.uri()),
            RequestOptions::new().with_auth(Auth::digest("user", "pass")),
        )
        .await
        .unwrap();

    // THEN: The authenticated answer came back
    assert_eq!(response.status().0, 200);
    let body: Value = response.json().unwrap();
    assert_eq!(body["authenticated"], true);
}

#[tokio::test]
async fn given_401_without_digest_challenge_when_get_then_401_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).insert_header("www-authenticate", r#"Basic realm="x""#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = fast_client(0)
        .get(
            &server.uri(),
            RequestOptions::new().with_auth(Auth::digest("user", "pass")),
        )
        .await
        .unwrap();

    assert_eq!(response.status().0, 401);
    assert!(response.raise_for_status().unwrap_err().is_status());
}

#[tokio::test]
async fn given_latin1_response_when_text_read_then_decoded_from_header_charset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"na\xefve caf\xe9".to_vec(), "text/plain; charset=ISO-8859-1"),
        )
        .mount(&server)
        .await;

    let response = fast_client(0)
        .get(&server.uri(), RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(response.text().unwrap(), "naïve café");
}

#[tokio::test]
async fn given_invalid_url_when_get_then_url_parse_error() {
    let err = fast_client(0)
        .get("not a url", RequestOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.error_category(), "url");
    assert!(!err.is_status());
}
