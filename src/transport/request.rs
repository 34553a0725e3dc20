use super::TransportError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One GraphQL operation as sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: Value,
}

/// Entry of the `errors` array of a GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Resolve the envelope to its `data`, turning reported errors into a failure.
    ///
    /// A response with both data and errors is treated as failed; the client
    /// has no partial-success handling.
    pub fn into_data(self) -> Result<Value, TransportError> {
        if !self.errors.is_empty() {
            return Err(TransportError::Graphql(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        match self.data {
            Some(Value::Null) | None => Err(TransportError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
