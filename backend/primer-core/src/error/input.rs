use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum InputError {
    #[error("Input Read Error: {source} {location}")]
    Io {
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Input Error: end of input reached {location}")]
    Eof { location: ErrorLocation },

    #[error("Input Error: no valid answer after {attempts} attempts {location}")]
    TooManyAttempts {
        attempts: u32,
        location: ErrorLocation,
    },
}

impl InputError {
    #[track_caller]
    pub fn eof() -> Self {
        InputError::Eof {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn too_many_attempts(attempts: u32) -> Self {
        InputError::TooManyAttempts {
            attempts,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        InputError::Io {
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}
