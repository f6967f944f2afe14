//! # Transport
//!
//! The SDK's only door to the network. Every query and every broadcast is a
//! [`NodeRequest`] (`{bcMethod, params}`) handed to a [`Transport`], and the
//! node's answer comes back as opaque JSON. Nothing above this layer looks
//! inside a response.
//!
//! [`HttpTransport`] speaks JSON-RPC 2.0 over HTTP. Anything else (a
//! websocket connection, an in-process node, a test stub) only has to
//! implement [`Transport::send`].

pub mod http;
pub mod rpc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use http::HttpTransport;
pub use rpc::{RpcError, RpcRequest, RpcResponse};

/// A request as the SDK phrases it: a method name and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRequest {
    #[serde(rename = "bcMethod")]
    pub bc_method: String,
    pub params: serde_json::Value,
}

impl NodeRequest {
    /// A request with the given method and parameters.
    pub fn new(bc_method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            bc_method: bc_method.into(),
            params,
        }
    }
}

/// Everything that can go wrong between sending a request and reading the
/// node's answer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, timeout, or body-read failure.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a non-success HTTP status.
    #[error("node returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The node answered with a JSON-RPC error object.
    #[error("node rejected request ({code}): {message}")]
    Rpc {
        code: i32,
        message: String,
        data: Option<serde_json::Value>,
    },

    /// The node's answer was not a JSON-RPC response.
    #[error("malformed node response: {0}")]
    Decode(String),
}

/// Sends one request and waits for one response. No retries, no caching.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: NodeRequest) -> Result<serde_json::Value, TransportError>;
}
