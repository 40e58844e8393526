//! Pure data for the primer workspace.
//!
//! This crate holds the value types and capability traits the rest of the
//! workspace operates on. Nothing here does I/O.
//!
//! ## Contents
//!
//! - **sequence**: the [`Sequence`] capability trait, [`MutableSequence`],
//!   and the read-only [`FrozenSeq`] container
//! - **http_method**: request methods and their safety/idempotency semantics
//! - **mail_provider**: SMTP connection security and well-known providers
//! - **literals**: escaped vs. raw string literal samples

pub mod error;
pub mod http_method;
pub mod literals;
pub mod mail_provider;
pub mod sequence;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use error::sequence_error::SequenceError;
pub use http_method::HttpMethod;
pub use mail_provider::{MailProvider, SmtpSecurity};
pub use sequence::frozen::FrozenSeq;
pub use sequence::{MutableSequence, SeqIter, Sequence, index_from_signed};
