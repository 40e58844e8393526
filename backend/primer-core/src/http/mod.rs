//! HTTP client: one request in, one buffered response out.
//!
//! Wraps `reqwest` with the pieces a script usually wires up by hand: query
//! parameters, JSON/form bodies, custom headers, basic/bearer/digest auth, a
//! TLS verification toggle, and a retry policy for idempotent requests.
//!
//! Status codes are not errors here. Call
//! [`HttpResponse::raise_for_status`] to turn 4xx/5xx into
//! [`HttpError::Status`].

pub mod check;
pub mod digest;
pub mod request;
pub mod response;
pub mod retry;

pub use check::{UrlCheck, check_urls};
pub use digest::{DigestChallenge, DigestRequest};
pub use request::{Auth, RequestBody, RequestOptions};
pub use response::HttpResponse;
pub use retry::RetryPolicy;

use crate::config::HttpConfig;
use crate::error::HttpError;

use models::HttpMethod;

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use reqwest::{Client, Method, Request, StatusCode};
use tokio::time::sleep as TokioSleep;
use url::Url;
use uuid::Uuid;

/// Nonce count for the single authenticated attempt after a challenge.
const DIGEST_NONCE_COUNT: u32 = 1;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    retry: RetryPolicy,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str());

        if !config.verify_tls {
            warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            retry: config.retry.clone(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub async fn get(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Get, url, options).await
    }

    pub async fn post(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Post, url, options).await
    }

    /// Send a request, retrying per the policy.
    ///
    /// When retries run out on a forcelisted status the last response is
    /// returned as-is; when they run out on a transport failure, that error is.
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let url = Url::parse(url)?;
        let mut schedule = self.retry.schedule();
        let mut retries = 0;

        loop {
            debug!("{method} {url} (attempt {})", retries + 1);

            match self.send_once(method, &url, &options).await {
                Ok(response) => {
                    let status = response.status();
                    if retries < self.retry.max_retries
                        && self.retry.should_retry_status(method, status.0)
                    {
                        let delay =
                            schedule.delay_for(self.retry.retry_after(response.headers()));
                        retries += 1;
                        warn!(
                            "{method} {url} returned {status}, retry {retries}/{} in {delay:?}",
                            self.retry.max_retries
                        );
                        TokioSleep(delay).await;
                        continue;
                    }
                    debug!("{method} {url} -> {status}");
                    return Ok(response);
                }
                Err(err) => {
                    if retries < self.retry.max_retries
                        && self.retry.should_retry_error(method, &err)
                    {
                        let delay = schedule.next_delay();
                        retries += 1;
                        warn!(
                            "{method} {url} failed ({}), retry {retries}/{} in {delay:?}",
                            err.error_category(),
                            self.retry.max_retries
                        );
                        TokioSleep(delay).await;
                        continue;
                    }
                    return Err(err);
                }
            }
        }
    }

    async fn send_once(
        &self,
        method: HttpMethod,
        url: &Url,
        options: &RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let request = self.build_request(method, url, options, None)?;
        let sent_url = request.url().clone();
        let mut response = self.client.execute(request).await?;

        if let Some(Auth::Digest { username, password }) = &options.auth {
            if response.status() == StatusCode::UNAUTHORIZED {
                let challenge = response
                    .headers()
                    .get_all(WWW_AUTHENTICATE)
                    .iter()
                    .filter_map(|value| value.to_str().ok())
                    .find_map(|value| DigestChallenge::parse(value).ok());

                match challenge {
                    Some(challenge) => {
                        let uri = request_target(&sent_url);
                        let cnonce = Uuid::new_v4().simple().to_string();
                        let authorization = challenge.authorization(
                            username,
                            password.expose(),
                            &DigestRequest {
                                method: method.as_str(),
                                uri: &uri,
                                nonce_count: DIGEST_NONCE_COUNT,
                                cnonce: &cnonce,
                            },
                        );
                        debug!("Answering digest challenge for realm '{}'", challenge.realm);
                        let retry = self.build_request(method, url, options, Some(authorization))?;
                        response = self.client.execute(retry).await?;
                    }
                    None => debug!("401 without a usable Digest challenge from {url}"),
                }
            }
        }

        HttpResponse::read(response).await
    }

    fn build_request(
        &self,
        method: HttpMethod,
        url: &Url,
        options: &RequestOptions,
        authorization: Option<String>,
    ) -> Result<Request, HttpError> {
        let mut builder = self.client.request(reqwest_method(method), url.clone());

        if !options.params.is_empty() {
            builder = builder.query(&options.params);
        }

        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match &options.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(fields) => builder.form(fields),
            RequestBody::Bytes {
                content,
                content_type,
            } => builder
                .header(CONTENT_TYPE, content_type.as_str())
                .body(content.clone()),
        };

        builder = match &options.auth {
            Some(Auth::Basic { username, password }) => {
                builder.basic_auth(username, Some(password.expose()))
            }
            Some(Auth::Bearer(token)) => builder.bearer_auth(token.expose()),
            Some(Auth::Digest { .. }) | None => builder,
        };

        if let Some(authorization) = authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

/// Path plus query, as it appears in the request line.
fn request_target(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Options => Method::OPTIONS,
        HttpMethod::Connect => Method::CONNECT,
        HttpMethod::Trace => Method::TRACE,
    }
}
