pub mod config;
pub mod error;
pub mod http;
pub mod input;
pub mod mail;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use error::CoreError;

pub const PRIMER_NAME: &str = "primer";
pub const PRIMER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_USER_AGENT: &str = const_format::concatcp!(PRIMER_NAME, "/", PRIMER_VERSION);
