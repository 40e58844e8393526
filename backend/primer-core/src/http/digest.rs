//! HTTP Digest access authentication (RFC 7616, with RFC 2069 fallback).

use crate::error::HttpError;

use std::collections::HashMap;
use std::sync::OnceLock;

use md5::Md5;
use regex::Regex;
use sha2::{Digest, Sha256};

const DIGEST_SCHEME: &str = "digest";
const QOP_AUTH: &str = "auth";
const CHALLENGE_PARAM_PATTERN: &str = r#"([A-Za-z][A-Za-z0-9_-]*)\s*=\s*(?:"((?:[^"\\]|\\.)*)"|([^\s,]+))"#;

static CHALLENGE_PARAM_REGEX: OnceLock<Regex> = OnceLock::new();

fn challenge_param_regex() -> &'static Regex {
    CHALLENGE_PARAM_REGEX
        .get_or_init(|| Regex::new(CHALLENGE_PARAM_PATTERN).expect("valid regex pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Md5Sess,
    Sha256,
    Sha256Sess,
}

impl DigestAlgorithm {
    #[track_caller]
    fn parse(name: &str) -> Result<Self, HttpError> {
        match name.to_ascii_uppercase().as_str() {
            "MD5" => Ok(DigestAlgorithm::Md5),
            "MD5-SESS" => Ok(DigestAlgorithm::Md5Sess),
            "SHA-256" => Ok(DigestAlgorithm::Sha256),
            "SHA-256-SESS" => Ok(DigestAlgorithm::Sha256Sess),
            other => Err(HttpError::digest(format!("Unsupported algorithm: {other}"))),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Md5Sess => "MD5-sess",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha256Sess => "SHA-256-sess",
        }
    }

    fn is_session(&self) -> bool {
        matches!(self, DigestAlgorithm::Md5Sess | DigestAlgorithm::Sha256Sess)
    }

    fn hash(&self, data: &str) -> String {
        match self {
            DigestAlgorithm::Md5 | DigestAlgorithm::Md5Sess => hex::encode(Md5::digest(data)),
            DigestAlgorithm::Sha256 | DigestAlgorithm::Sha256Sess => {
                hex::encode(Sha256::digest(data))
            }
        }
    }
}

/// A parsed `WWW-Authenticate: Digest ...` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestChallenge {
    pub realm: String,
    pub nonce: String,
    pub opaque: Option<String>,
    pub algorithm: DigestAlgorithm,
    /// `Some("auth")` when the server offers qop=auth, `None` for legacy servers.
    pub qop: Option<String>,
}

/// Per-request values that go into the response hash.
#[derive(Debug, Clone, Copy)]
pub struct DigestRequest<'a> {
    pub method: &'a str,
    pub uri: &'a str,
    pub nonce_count: u32,
    pub cnonce: &'a str,
}

impl DigestChallenge {
    /// Parse a header value.
    ///
    /// # Errors
    ///
    /// [`HttpError::Digest`] when the scheme is not Digest, `realm` or
    /// `nonce` is missing, the algorithm is unknown, or qop is offered
    /// without `auth`.
    #[track_caller]
    pub fn parse(header: &str) -> Result<Self, HttpError> {
        let trimmed = header.trim_start();
        let (scheme, params) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        if !scheme.eq_ignore_ascii_case(DIGEST_SCHEME) {
            return Err(HttpError::digest(format!("Not a Digest challenge: {scheme}")));
        }

        let mut values: HashMap<String, String> = HashMap::new();
        for captures in challenge_param_regex().captures_iter(params) {
            let key = captures[1].to_ascii_lowercase();
            let value = captures
                .get(2)
                .or_else(|| captures.get(3))
                .map(|m| m.as_str().replace("\\\"", "\""))
                .unwrap_or_default();
            values.insert(key, value);
        }

        let realm = values
            .remove("realm")
            .ok_or_else(|| HttpError::digest("Challenge has no realm"))?;
        let nonce = values
            .remove("nonce")
            .ok_or_else(|| HttpError::digest("Challenge has no nonce"))?;
        let algorithm = match values.remove("algorithm") {
            Some(name) => DigestAlgorithm::parse(&name)?,
            None => DigestAlgorithm::Md5,
        };
        let qop = match values.remove("qop") {
            Some(offered) => {
                if offered
                    .split(',')
                    .any(|option| option.trim().eq_ignore_ascii_case(QOP_AUTH))
                {
                    Some(QOP_AUTH.to_string())
                } else {
                    return Err(HttpError::digest(format!("Unsupported qop: {offered}")));
                }
            }
            None => None,
        };

        Ok(Self {
            realm,
            nonce,
            opaque: values.remove("opaque"),
            algorithm,
            qop,
        })
    }

    /// The hex `response` value for these credentials and request.
    pub fn response(&self, username: &str, password: &str, request: &DigestRequest<'_>) -> String {
        let algorithm = self.algorithm;
        let nc = format!("{:08x}", request.nonce_count);

        let mut ha1 = algorithm.hash(&format!("{username}:{}:{password}", self.realm));
        if algorithm.is_session() {
            ha1 = algorithm.hash(&format!("{ha1}:{}:{}", self.nonce, request.cnonce));
        }
        let ha2 = algorithm.hash(&format!("{}:{}", request.method, request.uri));

        match &self.qop {
            Some(qop) => algorithm.hash(&format!(
                "{ha1}:{}:{nc}:{}:{qop}:{ha2}",
                self.nonce, request.cnonce
            )),
            None => algorithm.hash(&format!("{ha1}:{}:{ha2}", self.nonce)),
        }
    }

    /// Full `Authorization` header value.
    pub fn authorization(
        &self,
        username: &str,
        password: &str,
        request: &DigestRequest<'_>,
    ) -> String {
        let response = self.response(username, password, request);
        let mut header = format!(
            "Digest username=\"{username}\", realm=\"{}\", nonce=\"{}\", uri=\"{}\", algorithm={}, response=\"{response}\"",
            self.realm,
            self.nonce,
            request.uri,
            self.algorithm.as_str(),
        );
        if let Some(qop) = &self.qop {
            header.push_str(&format!(
                ", qop={qop}, nc={:08x}, cnonce=\"{}\"",
                request.nonce_count, request.cnonce
            ));
        }
        if let Some(opaque) = &self.opaque {
            header.push_str(&format!(", opaque=\"{opaque}\""));
        }
        header
    }
}
