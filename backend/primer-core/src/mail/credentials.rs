//! Where the SMTP password comes from.
//!
//! Resolution order: the config file, then `PRIMER_SMTP_PASSWORD` (after
//! loading a `.env` file if one exists), then an interactive hidden prompt.

use crate::config::SmtpConfig;
use crate::error::{InputError, MailError};

use common::RedactedSecret;

use std::env;

use log::{debug, info, warn};

pub const SMTP_PASSWORD_ENV: &str = "PRIMER_SMTP_PASSWORD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSource {
    Config,
    Environment,
    Prompt,
}

/// Resolve the SMTP password, calling `prompt` only as a last resort.
pub fn resolve_password<F>(
    config: &SmtpConfig,
    prompt: F,
) -> Result<(RedactedSecret, PasswordSource), MailError>
where
    F: FnOnce() -> Result<RedactedSecret, InputError>,
{
    if let Some(password) = &config.password {
        debug!("Using SMTP password from config ({} chars)", password.len());
        return Ok((password.clone(), PasswordSource::Config));
    }

    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded .env from: {:?}", path),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to parse .env: {}", e),
    }

    match env::var(SMTP_PASSWORD_ENV) {
        Ok(value) if !value.is_empty() => {
            debug!("Using SMTP password from {SMTP_PASSWORD_ENV}");
            return Ok((RedactedSecret::new(value), PasswordSource::Environment));
        }
        Ok(_) => debug!("{SMTP_PASSWORD_ENV} is empty, ignoring"),
        Err(env::VarError::NotPresent) => debug!("{SMTP_PASSWORD_ENV} not set"),
        Err(env::VarError::NotUnicode(_)) => {
            warn!("{SMTP_PASSWORD_ENV} contains invalid unicode, ignoring")
        }
    }

    let password = prompt().map_err(|e| MailError::credentials(e.to_string()))?;
    if password.is_empty() {
        return Err(MailError::credentials("Empty SMTP password"));
    }
    Ok((password, PasswordSource::Prompt))
}
