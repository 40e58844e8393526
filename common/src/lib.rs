//! Shared building blocks for the primer workspace.
//!
//! Nothing in here knows about HTTP, mail or sequences. It only provides the
//! pieces every other crate leans on:
//!
//! - [`ErrorLocation`]: file/line/column captured into every error variant
//! - [`HttpStatusCode`]: status classification used by error and retry logic
//! - [`RedactedSecret`]: passwords and tokens that never show up in logs

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::secret_error::SecretError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
