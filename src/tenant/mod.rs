//! Active organization (tenant) handling.
//!
//! The active tenant is an explicit [`TenantContext`] value: loaded once at
//! startup by the [`TenantStore`], changed only by the [`TenantSelector`],
//! and read by the transport for every request.

mod error;
mod selector;
mod slug;
mod store;

pub use error::{StoreError, TenantError};
pub use selector::TenantSelector;
pub use slug::{find_by_slug, normalize_slug_input, org_exists, slugs_match};
pub use store::{TenantStore, STATE_FILE};

/// Slug used when no tenant has been chosen yet.
pub const DEFAULT_ORG_SLUG: &str = "demo-org";

/// The organization on whose behalf requests are made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    slug: String,
}

impl TenantContext {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub(crate) fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }
}

impl Default for TenantContext {
    fn default() -> Self {
        Self::new(DEFAULT_ORG_SLUG)
    }
}
