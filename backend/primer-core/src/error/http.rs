//! Error types for HTTP client operations.
//!
//! - `Status` is the distinguished "the server answered 4xx/5xx" error raised
//!   by `raise_for_status`; everything else is some other failure
//! - Transport failures keep the timeout/connect flags so the retry policy
//!   can decide without parsing messages

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HttpError {
    #[error("HTTP Status Error: {status} {reason} for url: {url} {location}")]
    Status {
        status: HttpStatusCode,
        reason: String,
        url: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connect: bool,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Request Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Digest Auth Error: {message} {location}")]
    Digest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl HttpError {
    #[track_caller]
    pub fn status(status: u16, reason: impl Into<String>, url: impl Into<String>) -> Self {
        HttpError::Status {
            status: HttpStatusCode(status),
            reason: reason.into(),
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn digest(message: impl Into<String>) -> Self {
        HttpError::Digest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        HttpError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for the 4xx/5xx error raised by `raise_for_status`.
    pub fn is_status(&self) -> bool {
        matches!(self, HttpError::Status { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(status.0),
            _ => None,
        }
    }

    /// Transport failures worth another attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            HttpError::Transport {
                is_timeout,
                is_connect,
                ..
            } => *is_timeout || *is_connect,
            _ => false,
        }
    }

    /// Short category name for logging.
    pub fn error_category(&self) -> &'static str {
        match self {
            HttpError::Status { status, .. } if status.is_client_error() => "client_error",
            HttpError::Status { .. } => "server_error",
            HttpError::Transport {
                is_timeout: true, ..
            } => "timeout",
            HttpError::Transport {
                is_connect: true, ..
            } => "connection",
            HttpError::Transport { .. } => "transport",
            HttpError::UrlParse { .. } => "url",
            HttpError::Request { .. } => "request",
            HttpError::Json { .. } => "json",
            HttpError::Digest { .. } => "digest",
            HttpError::Decode { .. } => "decode",
        }
    }
}

impl From<reqwest::Error> for HttpError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Check the kind BEFORE converting to a string.
        let is_timeout = error.is_timeout();
        let is_connect = error.is_connect();

        if error.is_builder() {
            return HttpError::Request {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        HttpError::Transport {
            message: error.to_string(),
            is_timeout,
            is_connect,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for HttpError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        HttpError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for HttpError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        HttpError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
