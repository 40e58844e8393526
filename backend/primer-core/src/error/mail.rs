use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum MailError {
    #[error("Address Error: {message} {location}")]
    Address {
        message: String,
        location: ErrorLocation,
    },

    #[error("Message Build Error: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
    },

    #[error("Attachment Error: {path}: {source} {location}")]
    Attachment {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("SMTP Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credentials Error: {message} {location}")]
    Credentials {
        message: String,
        location: ErrorLocation,
    },
}

impl MailError {
    #[track_caller]
    pub fn build(message: impl Into<String>) -> Self {
        MailError::Build {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn credentials(message: impl Into<String>) -> Self {
        MailError::Credentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        MailError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<lettre::address::AddressError> for MailError {
    #[track_caller]
    fn from(error: lettre::address::AddressError) -> Self {
        MailError::Address {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<lettre::error::Error> for MailError {
    #[track_caller]
    fn from(error: lettre::error::Error) -> Self {
        MailError::Build {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    #[track_caller]
    fn from(error: lettre::transport::smtp::Error) -> Self {
        MailError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
