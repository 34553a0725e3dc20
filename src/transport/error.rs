use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{}", .0.join("; "))]
    Graphql(Vec<String>),

    #[error("Response contained no data")]
    MissingData,

    #[error("Malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}
