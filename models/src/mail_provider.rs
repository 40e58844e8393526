//! SMTP connection security and the settings of common mail providers.
//!
//! | Port | Security | Use |
//! |------|----------|-----|
//! | 25   | none     | server-to-server relay, often blocked by ISPs |
//! | 465  | implicit TLS | encrypted from the first byte |
//! | 587  | STARTTLS | client submission, upgraded in place |

use crate::ModelError;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the SMTP connection gets encrypted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmtpSecurity {
    /// Unencrypted. Only for local debugging servers.
    Plain,
    /// TLS from connect (SMTPS).
    ImplicitTls,
    /// Plain connect, then `STARTTLS` before authenticating.
    #[default]
    StartTls,
}

impl SmtpSecurity {
    pub fn default_port(&self) -> u16 {
        match self {
            SmtpSecurity::Plain => 25,
            SmtpSecurity::ImplicitTls => 465,
            SmtpSecurity::StartTls => 587,
        }
    }

    pub fn is_encrypted(&self) -> bool {
        !matches!(self, SmtpSecurity::Plain)
    }
}

impl Display for SmtpSecurity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(match self {
            SmtpSecurity::Plain => "plain",
            SmtpSecurity::ImplicitTls => "implicit_tls",
            SmtpSecurity::StartTls => "start_tls",
        })
    }
}

impl FromStr for SmtpSecurity {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" | "none" => Ok(SmtpSecurity::Plain),
            "implicit_tls" | "tls" | "ssl" | "smtps" => Ok(SmtpSecurity::ImplicitTls),
            "start_tls" | "starttls" => Ok(SmtpSecurity::StartTls),
            _ => Err(ModelError::unknown("SMTP security mode", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailProvider {
    Gmail,
    Yahoo,
    Outlook,
    Aol,
    Att,
}

impl MailProvider {
    pub const ALL: [MailProvider; 5] = [
        MailProvider::Gmail,
        MailProvider::Yahoo,
        MailProvider::Outlook,
        MailProvider::Aol,
        MailProvider::Att,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MailProvider::Gmail => "gmail",
            MailProvider::Yahoo => "yahoo",
            MailProvider::Outlook => "outlook",
            MailProvider::Aol => "aol",
            MailProvider::Att => "att",
        }
    }

    pub fn host(&self) -> &'static str {
        match self {
            MailProvider::Gmail => "smtp.gmail.com",
            MailProvider::Yahoo => "smtp.mail.yahoo.com",
            MailProvider::Outlook => "smtp-mail.outlook.com",
            MailProvider::Aol => "smtp.aol.com",
            MailProvider::Att => "smtp.mail.att.net",
        }
    }

    pub fn security(&self) -> SmtpSecurity {
        match self {
            MailProvider::Yahoo | MailProvider::Att => SmtpSecurity::ImplicitTls,
            MailProvider::Gmail | MailProvider::Outlook | MailProvider::Aol => {
                SmtpSecurity::StartTls
            }
        }
    }

    pub fn port(&self) -> u16 {
        self.security().default_port()
    }
}

impl FromStr for MailProvider {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.trim().to_ascii_lowercase();
        MailProvider::ALL
            .into_iter()
            .find(|provider| provider.name() == lower)
            .ok_or_else(|| ModelError::unknown("mail provider", value))
    }
}
