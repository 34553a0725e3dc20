use super::{GraphqlRequest, GraphqlResponse, Transport, TransportError, TENANT_HEADER};
use crate::tenant::TenantContext;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP client for a single GraphQL endpoint.
///
/// Requests are `POST`ed as JSON. The tenant slug is read from the context
/// passed to each call, never from ambient state.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        tenant: &TenantContext,
        request: &GraphqlRequest,
    ) -> Result<Value, TransportError> {
        debug!(
            operation = request.operation_name,
            tenant = tenant.slug(),
            "Sending GraphQL request"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .header(TENANT_HEADER, tenant.slug())
            .json(request)
            .send()
            .await
            .inspect_err(|e| error!(operation = request.operation_name, "request failed: {e}"))?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            // GraphQL servers commonly report resolver errors with a 4xx status
            // and a regular error envelope.
            if let Ok(envelope) = serde_json::from_str::<GraphqlResponse>(&text) {
                if !envelope.errors.is_empty() {
                    return envelope.into_data();
                }
            }
            error!(operation = request.operation_name, status = %status, "GraphQL request rejected");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: GraphqlResponse = serde_json::from_str(&text)?;
        envelope.into_data()
    }
}
