use crate::error::HttpError;
use crate::http::{HttpClient, RequestOptions};

use log::info;

/// Outcome of fetching one URL and raising for status.
#[derive(Debug)]
pub enum UrlCheck {
    Success,
    /// The server answered 4xx/5xx.
    HttpStatus(HttpError),
    /// Anything else: bad URL, DNS, connection, timeout.
    Other(HttpError),
}

impl UrlCheck {
    pub fn is_success(&self) -> bool {
        matches!(self, UrlCheck::Success)
    }
}

/// GET each URL in turn and classify the outcome.
pub async fn check_urls(client: &HttpClient, urls: &[String]) -> Vec<(String, UrlCheck)> {
    let mut results = Vec::with_capacity(urls.len());

    for url in urls {
        let outcome = match client.get(url, RequestOptions::new()).await {
            Ok(response) => match response.raise_for_status() {
                Ok(()) => UrlCheck::Success,
                Err(err) => UrlCheck::HttpStatus(err),
            },
            Err(err) => UrlCheck::Other(err),
        };
        info!("Checked {url}: {}", if outcome.is_success() { "ok" } else { "failed" });
        results.push((url.clone(), outcome));
    }

    results
}
