use super::{StoreError, TenantContext};
use crate::utils::minipm_home;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::{debug, info, warn};

/// Name of the persisted client state file inside the minipm home.
pub const STATE_FILE: &str = "state.json";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    org_slug: Option<String>,
}

/// Persisted active-tenant slug (`<home>/state.json`).
#[derive(Debug, Clone)]
pub struct TenantStore {
    path: PathBuf,
}

impl TenantStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.minipm/state.json` (or under `MINIPM_HOME`).
    pub fn default_location() -> Result<Self, StoreError> {
        let home = minipm_home().ok_or(StoreError::HomeDirNotFound)?;
        Ok(Self::new(home.join(STATE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted tenant, or `fallback_slug` when none is stored.
    ///
    /// An unreadable or corrupt state file is logged and treated as absent;
    /// the next successful switch rewrites it.
    pub async fn load(&self, fallback_slug: &str) -> TenantContext {
        match self.read_slug().await {
            Ok(Some(slug)) => TenantContext::new(slug),
            Ok(None) => {
                debug!("No client state at {}; using {fallback_slug}", self.path.display());
                TenantContext::new(fallback_slug)
            }
            Err(e) => {
                warn!(
                    "Failed to read client state at {}, using {fallback_slug}: {e}",
                    self.path.display()
                );
                TenantContext::new(fallback_slug)
            }
        }
    }

    async fn read_slug(&self) -> Result<Option<String>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state: PersistedState = serde_json::from_str(&content)?;
        Ok(state.org_slug.filter(|s| !s.trim().is_empty()))
    }

    /// Persist `tenant` atomically.
    pub async fn save(&self, tenant: &TenantContext) -> Result<(), StoreError> {
        let state = PersistedState {
            org_slug: Some(tenant.slug().to_string()),
        };
        let content = serde_json::to_string_pretty(&state)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        write_atomically(self.path.clone(), content).await?;
        info!("Active organization is now {}", tenant.slug());
        Ok(())
    }
}

/// Write through a temp file in the target directory and rename over the target.
async fn write_atomically(target: PathBuf, content: String) -> io::Result<()> {
    let parent = target
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&target)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
