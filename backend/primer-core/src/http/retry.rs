//! Automatic retry policy for idempotent requests.
//!
//! The delay before retry `n` (1-based) is `backoff_factor * 2^(n-1)`, capped
//! at `backoff_max`. A `Retry-After: <seconds>` response header replaces the
//! computed delay when `respect_retry_after` is set.

use crate::config::duration_format;
use crate::error::HttpError;

use models::HttpMethod;

use std::time::Duration;

use backoff::ExponentialBackoff;
use backoff::ExponentialBackoffBuilder;
use backoff::backoff::Backoff;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::{Deserialize, Serialize};

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_FACTOR: Duration = Duration::from_millis(500);
const DEFAULT_BACKOFF_MAX: Duration = Duration::from_secs(120);
const DEFAULT_STATUS_FORCELIST: [u16; 5] = [429, 500, 502, 503, 504];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first attempt; 0 disables retrying.
    pub max_retries: u32,
    #[serde(with = "duration_format")]
    pub backoff_factor: Duration,
    #[serde(with = "duration_format")]
    pub backoff_max: Duration,
    /// Response statuses that trigger a retry.
    pub status_forcelist: Vec<u16>,
    /// Only these methods are ever retried.
    pub allowed_methods: Vec<HttpMethod>,
    pub respect_retry_after: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            backoff_max: DEFAULT_BACKOFF_MAX,
            status_forcelist: DEFAULT_STATUS_FORCELIST.to_vec(),
            allowed_methods: HttpMethod::ALL
                .into_iter()
                .filter(HttpMethod::is_idempotent)
                .collect(),
            respect_retry_after: true,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn allows_method(&self, method: HttpMethod) -> bool {
        self.allowed_methods.contains(&method)
    }

    pub fn should_retry_status(&self, method: HttpMethod, status: u16) -> bool {
        self.allows_method(method) && self.status_forcelist.contains(&status)
    }

    pub fn should_retry_error(&self, method: HttpMethod, error: &HttpError) -> bool {
        self.allows_method(method) && error.is_transient()
    }

    /// Fresh delay schedule for one logical request.
    pub fn schedule(&self) -> RetrySchedule {
        RetrySchedule::new(self)
    }

    /// Delay demanded by a `Retry-After: <seconds>` header, capped at `backoff_max`.
    ///
    /// HTTP-date values are not honoured; the computed backoff applies instead.
    pub fn retry_after(&self, headers: &HeaderMap) -> Option<Duration> {
        if !self.respect_retry_after {
            return None;
        }
        let seconds: u64 = headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()?;
        Some(Duration::from_secs(seconds).min(self.backoff_max))
    }
}

/// Exponential delay sequence for the retries of a single request.
pub struct RetrySchedule {
    backoff: ExponentialBackoff,
    ceiling: Duration,
}

impl RetrySchedule {
    fn new(policy: &RetryPolicy) -> Self {
        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_interval(policy.backoff_factor)
            .with_multiplier(2.0)
            .with_randomization_factor(0.0)
            .with_max_interval(policy.backoff_max)
            .with_max_elapsed_time(None)
            .build();

        Self {
            backoff,
            ceiling: policy.backoff_max,
        }
    }

    /// Delay before the next retry.
    pub fn next_delay(&mut self) -> Duration {
        self.backoff
            .next_backoff()
            .unwrap_or(self.ceiling)
            .min(self.ceiling)
    }

    /// Delay before the next retry, preferring `retry_after` when present.
    ///
    /// The exponential sequence advances either way, so a later retry without
    /// the header still waits `factor * 2^(n-1)`.
    pub fn delay_for(&mut self, retry_after: Option<Duration>) -> Duration {
        let computed = self.next_delay();
        retry_after.unwrap_or(computed)
    }
}
