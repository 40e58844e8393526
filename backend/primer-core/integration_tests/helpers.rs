//! Test helpers for HTTP integration tests.
//!
//! - A client with zero backoff so retry tests never sleep
//! - A URL that refuses connections
//! - A matcher that checks a Digest answer end to end

use primer_core::config::HttpConfig;
use primer_core::http::{DigestChallenge, DigestRequest, HttpClient, RetryPolicy};

use std::net::TcpListener;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use wiremock::{Match, Request};

/// Client whose retries fire immediately.
pub fn fast_client(max_retries: u32) -> HttpClient {
    let config = HttpConfig {
        timeout: Duration::from_secs(5),
        retry: RetryPolicy {
            max_retries,
            backoff_factor: Duration::ZERO,
            ..RetryPolicy::default()
        },
        ..HttpConfig::default()
    };
    HttpClient::new(&config).expect("Failed to build HTTP client")
}

/// A loopback URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe listener");
    let port = listener
        .local_addr()
        .expect("Failed to read probe address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

/// Matches a request whose `Authorization` header is the correct Digest
/// answer to `challenge` for the given credentials.
pub struct DigestAnswer {
    pub challenge: &'static str,
    pub username: &'static str,
    pub password: &'static str,
}

impl Match for DigestAnswer {
    fn matches(&self, request: &Request) -> bool {
        let Some(sent) = request
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
        else {
            return false;
        };
        let Some(cnonce) = sent
            .split("cnonce=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
        else {
            return false;
        };
        let Ok(challenge) = DigestChallenge::parse(self.challenge) else {
            return false;
        };

        let expected = challenge.authorization(
            self.username,
            self.password,
            &DigestRequest {
                method: request.method.as_str(),
                uri: request.url.path(),
                nonce_count: 1,
                cnonce,
            },
        );
        sent == expected
    }
}
