//! GraphQL transport binding.
//!
//! Every request is sent on behalf of an explicit [`TenantContext`]; the
//! transport forwards its slug in the [`TENANT_HEADER`] header.

mod error;
mod http;
mod request;

pub use error::TransportError;
pub use http::HttpTransport;
pub use request::{GraphqlError, GraphqlRequest, GraphqlResponse};

use crate::tenant::TenantContext;
use async_trait::async_trait;
use serde_json::Value;

/// Header carrying the active organization slug.
pub const TENANT_HEADER: &str = "X-Org-Slug";

/// A GraphQL endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one operation for `tenant` and return the response `data` object.
    async fn execute(
        &self,
        tenant: &TenantContext,
        request: &GraphqlRequest,
    ) -> Result<Value, TransportError>;
}
