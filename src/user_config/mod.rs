//! User-level configuration loaded from `~/.minipm/config.toml`.
//!
//! The file is optional; every field falls back to its default.

mod loader;

pub use loader::{load_user_config, load_user_config_from};

use crate::tenant::DEFAULT_ORG_SLUG;
use crate::utils::minipm_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// GraphQL endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/graphql";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_slug() -> String {
    DEFAULT_ORG_SLUG.to_string()
}

/// `[api]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[tenant]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TenantConfig {
    /// Slug used when no tenant has been persisted yet.
    #[serde(default = "default_slug")]
    pub default_slug: String,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            default_slug: default_slug(),
        }
    }
}

/// Top-level user configuration, deserialized from `~/.minipm/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tenant: TenantConfig,
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    minipm_home().map(|h| h.join("config.toml"))
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
