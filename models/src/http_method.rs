//! HTTP request methods and what each one promises.
//!
//! A *safe* method does not ask the server to change anything. An
//! *idempotent* method may be repeated without changing the outcome beyond
//! the first call, which is what makes it eligible for automatic retries.
//! PUT and DELETE are idempotent but not safe; POST and PATCH are neither.

use crate::ModelError;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Head,
    Delete,
    Patch,
    Options,
    Connect,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 9] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Head,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
        HttpMethod::Connect,
        HttpMethod::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Head => "HEAD",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Read-only methods.
    pub fn is_safe(&self) -> bool {
        matches!(
            self,
            HttpMethod::Get | HttpMethod::Head | HttpMethod::Options | HttpMethod::Trace
        )
    }

    pub fn is_idempotent(&self) -> bool {
        self.is_safe() || matches!(self, HttpMethod::Put | HttpMethod::Delete)
    }

    /// HEAD returns headers only; a successful CONNECT switches to a tunnel.
    pub fn has_response_body(&self) -> bool {
        !matches!(self, HttpMethod::Head | HttpMethod::Connect)
    }

    pub fn description(&self) -> &'static str {
        match self {
            HttpMethod::Get => "Request data from a resource; parameters travel in the query string",
            HttpMethod::Post => "Submit data in the body to create a resource; repeating may create duplicates",
            HttpMethod::Put => "Create or replace the resource at the URL; repeating leaves the same state",
            HttpMethod::Head => "Same as GET without the body, e.g. to learn the content length",
            HttpMethod::Delete => "Delete the specified resource",
            HttpMethod::Patch => "Apply a partial modification to a resource",
            HttpMethod::Options => "Describe the communication options for the resource",
            HttpMethod::Connect => "Open a tunnel to the server, used for TLS through proxies",
            HttpMethod::Trace => "Echo the request back to test the path to the resource",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.trim().to_ascii_uppercase();
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == upper)
            .ok_or_else(|| ModelError::unknown("HTTP method", value))
    }
}
