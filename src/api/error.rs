use crate::transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Unexpected {operation} response: missing {path}")]
    MissingField {
        operation: &'static str,
        path: &'static str,
    },

    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {operation} variables: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
