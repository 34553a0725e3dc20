use super::slug::{find_by_slug, normalize_slug_input, org_exists};
use super::{TenantContext, TenantError, TenantStore};
use crate::api::Organization;
use crate::sync::SyncClient;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Create and switch flows for the active organization.
///
/// Both flows read the authoritative organization list first and only
/// touch the tenant context (and its persisted copy) on success.
pub struct TenantSelector {
    client: Arc<SyncClient>,
    store: TenantStore,
}

impl TenantSelector {
    pub fn new(client: Arc<SyncClient>, store: TenantStore) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &TenantStore {
        &self.store
    }

    /// Create an organization named after `input` and make it active.
    ///
    /// The slug returned by the server becomes the active tenant.
    pub async fn create(
        &self,
        tenant: &mut TenantContext,
        input: &str,
    ) -> Result<Organization, TenantError> {
        let slug = normalize_slug_input(input).ok_or(TenantError::EmptySlug)?;

        let orgs = self.client.organizations(tenant).await.map_err(|e| {
            error!("Failed to list organizations: {e}");
            TenantError::CreateFailed(e)
        })?;
        if org_exists(&slug, &orgs) {
            warn!(slug = %slug, "Organization already exists");
            return Err(TenantError::AlreadyExists(slug));
        }

        let settled = self
            .client
            .create_organization(tenant, &slug, &slug)
            .await
            .map_err(|e| {
                error!(slug = %slug, "Failed to create organization: {e}");
                TenantError::CreateFailed(e)
            })?;
        let org = settled.value;

        self.adopt(tenant, &org.slug).await?;
        info!(slug = %org.slug, "Created organization");
        Ok(org)
    }

    /// Make the existing organization matching `input` active.
    ///
    /// The organization's canonical slug is adopted, whatever case was typed.
    pub async fn switch(
        &self,
        tenant: &mut TenantContext,
        input: &str,
    ) -> Result<Organization, TenantError> {
        let slug = normalize_slug_input(input).ok_or(TenantError::EmptySlug)?;

        let orgs = self.client.organizations(tenant).await.map_err(|e| {
            error!("Failed to list organizations: {e}");
            TenantError::SwitchFailed(e)
        })?;
        let Some(org) = find_by_slug(&slug, &orgs) else {
            warn!(slug = %slug, "No organization with this slug");
            return Err(TenantError::NotFound(slug));
        };

        self.adopt(tenant, &org.slug).await?;
        info!(slug = %org.slug, "Switched organization");
        Ok(org.clone())
    }

    /// Persist first so that a failed write leaves the context untouched.
    async fn adopt(&self, tenant: &mut TenantContext, slug: &str) -> Result<(), TenantError> {
        let next = TenantContext::new(slug);
        self.store.save(&next).await?;
        tenant.set_slug(slug.to_string());
        Ok(())
    }
}
