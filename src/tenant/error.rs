use crate::api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to determine home directory")]
    HomeDirNotFound,
}

#[derive(Error, Debug)]
pub enum TenantError {
    #[error("Organization slug cannot be empty")]
    EmptySlug,

    #[error("Organization already exists. Please create a new one.")]
    AlreadyExists(String),

    #[error("Slug does not exist. Enter another.")]
    NotFound(String),

    #[error("Failed to create org: {0}")]
    CreateFailed(#[source] ApiError),

    #[error("Failed to switch org: {0}")]
    SwitchFailed(#[source] ApiError),

    #[error("Failed to save active organization: {0}")]
    Store(#[from] StoreError),
}
