use crate::error::HttpError;

use common::HttpStatusCode;

use encoding_rs::{Encoding, UTF_8};
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use url::Url;

/// A fully buffered response.
///
/// The body is read once when the response arrives, so every accessor can be
/// called any number of times.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    url: Url,
    headers: HeaderMap,
    content: Vec<u8>,
    encoding: Option<String>,
}

impl HttpResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, HttpError> {
        let status = response.status();
        let url = response.url().clone();
        let headers = response.headers().clone();
        let content = response.bytes().await?.to_vec();

        Ok(Self::from_parts(status, url, headers, content))
    }

    pub fn from_parts(status: StatusCode, url: Url, headers: HeaderMap, content: Vec<u8>) -> Self {
        Self {
            status,
            url,
            headers,
            content,
            encoding: None,
        }
    }

    pub fn status(&self) -> HttpStatusCode {
        HttpStatusCode(self.status.as_u16())
    }

    /// Canonical reason phrase, e.g. "Not Found".
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Unknown")
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Final URL, after redirects.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Raw body bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Charset used by [`text`](Self::text): the override if set, else the
    /// `Content-Type` charset parameter.
    pub fn encoding(&self) -> Option<String> {
        self.encoding.clone().or_else(|| {
            self.header(CONTENT_TYPE.as_str())
                .and_then(charset_from_content_type)
        })
    }

    /// Override the charset guessed from the headers.
    pub fn set_encoding(&mut self, label: impl Into<String>) {
        self.encoding = Some(label.into());
    }

    /// Body decoded as text. Undecodable bytes become U+FFFD.
    ///
    /// # Errors
    ///
    /// [`HttpError::Decode`] when the charset label is unknown.
    pub fn text(&self) -> Result<String, HttpError> {
        let encoding = match self.encoding() {
            Some(label) => Encoding::for_label(label.trim().as_bytes())
                .ok_or_else(|| HttpError::decode(format!("Unknown encoding: {label}")))?,
            None => UTF_8,
        };
        let (text, _, _) = encoding.decode(&self.content);
        Ok(text.into_owned())
    }

    /// Body deserialized from JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        Ok(serde_json::from_slice(&self.content)?)
    }

    /// Fail with [`HttpError::Status`] for 4xx and 5xx responses.
    #[track_caller]
    pub fn raise_for_status(&self) -> Result<(), HttpError> {
        if self.status().is_error() {
            return Err(HttpError::status(
                self.status.as_u16(),
                self.reason(),
                self.url.as_str(),
            ));
        }
        Ok(())
    }
}

fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"').to_string())
        } else {
            None
        }
    })
}
