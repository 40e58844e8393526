pub mod config;
pub mod http;
pub mod input;
pub mod mail;

pub use config::ConfigError;
pub use http::HttpError;
pub use input::InputError;
pub use mail::MailError;

use models::{ModelError, SequenceError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Mail(#[from] MailError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
