use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SecretError {
    /// A secret reached a serializer, e.g. a config save.
    #[error("Secret Error: refusing to serialize a secret value; call expose() instead {location}")]
    NotSerializable { location: ErrorLocation },
}
