//! JSON-RPC 2.0 over HTTP, via `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use uuid::Uuid;

use super::rpc::{RpcRequest, RpcResponse};
use super::{NodeRequest, Transport, TransportError};
use crate::config::SdkConfig;

/// Posts each request to a single node endpoint.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection
/// pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    /// A transport for `url` with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// A transport for the endpoint and timeout in `config`.
    pub fn from_config(config: &SdkConfig) -> Result<Self, TransportError> {
        Self::new(config.rpc_url.clone(), config.request_timeout)
    }

    /// The endpoint requests are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: NodeRequest) -> Result<serde_json::Value, TransportError> {
        let id = Uuid::new_v4().to_string();
        let rpc = RpcRequest::from_node_request(serde_json::Value::String(id.clone()), request);
        tracing::debug!(method = %rpc.method, id = %id, url = %self.url, "sending node request");

        let resp = self.client.post(&self.url).json(&rpc).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(method = %rpc.method, status = status.as_u16(), "node returned error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RpcResponse =
            serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;
        parsed.into_result()
    }
}
