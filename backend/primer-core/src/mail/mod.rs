//! Sending mail over SMTP.
//!
//! Connection security follows [`SmtpSecurity`]: implicit TLS (SMTPS, 465),
//! a plain connection upgraded with STARTTLS (587), or no encryption at all
//! for a local debugging server. Each [`MailSender::send`] is a single
//! submission; nothing is queued or retried.

pub mod credentials;
pub mod message;

pub use credentials::{PasswordSource, SMTP_PASSWORD_ENV, resolve_password};
pub use lettre::AsyncTransport;
pub use message::{MailAttachment, MessageDraft};

use crate::config::SmtpConfig;
use crate::error::MailError;

use common::RedactedSecret;
use models::SmtpSecurity;

use std::fmt::Display;

use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, Tokio1Executor};
use log::info;

pub type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

/// Login for the SMTP session.
#[derive(Debug, Clone)]
pub struct SmtpLogin {
    pub username: String,
    pub password: RedactedSecret,
}

impl SmtpLogin {
    pub fn new(username: impl Into<String>, password: RedactedSecret) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// Build the SMTP transport for `config`.
///
/// Nothing connects until the first send.
pub fn smtp_transport(
    config: &SmtpConfig,
    login: Option<SmtpLogin>,
) -> Result<SmtpTransport, MailError> {
    let endpoint = config.endpoint();

    let builder = match endpoint.security {
        SmtpSecurity::ImplicitTls => SmtpTransport::relay(&endpoint.host)?,
        SmtpSecurity::StartTls => SmtpTransport::starttls_relay(&endpoint.host)?,
        SmtpSecurity::Plain => SmtpTransport::builder_dangerous(&endpoint.host),
    };

    let mut builder = builder
        .port(endpoint.port)
        .timeout(Some(config.timeout));

    if let Some(login) = login {
        builder = builder.credentials(Credentials::new(
            login.username,
            login.password.expose().to_string(),
        ));
    }

    info!(
        "SMTP transport for {}:{} ({})",
        endpoint.host, endpoint.port, endpoint.security
    );
    Ok(builder.build())
}

/// Submits drafts through any lettre async transport.
pub struct MailSender<T> {
    transport: T,
}

impl MailSender<SmtpTransport> {
    pub fn smtp(config: &SmtpConfig, login: Option<SmtpLogin>) -> Result<Self, MailError> {
        Ok(Self::new(smtp_transport(config, login)?))
    }
}

impl<T> MailSender<T>
where
    T: AsyncTransport + Sync,
    T::Error: Display,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build and submit one message to all its recipients.
    pub async fn send(&self, draft: &MessageDraft) -> Result<(), MailError> {
        let message = draft.build()?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::transport(e.to_string()))?;

        info!(
            "Sent '{}' from {} to {} recipient(s)",
            draft.subject,
            draft.from,
            draft.recipient_count()
        );
        Ok(())
    }
}
