use common::ErrorLocation;

use models::{ModelError, SequenceError};
use primer_core::CoreError;
use primer_core::error::{ConfigError, HttpError, InputError, MailError};

use std::panic::Location;

use thiserror::Error;

/// Errors a command can end with. `main` prints them and exits non-zero.
#[derive(Debug, Error)]
pub enum PrimerError {
    /// Error from this app
    #[error("Primer Error: {message} {location}")]
    Primer {
        message: String,
        location: ErrorLocation,
    },

    /// Bad combination of arguments clap cannot express
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    /// Writing command output failed
    #[error("Output Error: {source} {location}")]
    Output {
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    /// Error from primer-core or models
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PrimerError {
    #[track_caller]
    pub fn primer(message: impl Into<String>) -> Self {
        PrimerError::Primer {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        PrimerError::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for PrimerError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        PrimerError::Output {
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}

macro_rules! from_core_error {
    ($($error:ty),+ $(,)?) => {
        $(
            impl From<$error> for PrimerError {
                fn from(error: $error) -> Self {
                    PrimerError::Core(CoreError::from(error))
                }
            }
        )+
    };
}

from_core_error!(HttpError, MailError, InputError, ConfigError, ModelError, SequenceError);
