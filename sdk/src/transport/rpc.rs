//! # JSON-RPC 2.0 Envelope
//!
//! The framing [`HttpTransport`](super::HttpTransport) wraps around a
//! [`NodeRequest`](super::NodeRequest). The node answers with exactly one of
//! `result` or `error`; a response carrying neither is treated as malformed.
//!
//! Error codes follow the JSON-RPC 2.0 specification:
//! - `-32700`: Parse error
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//! - `-32000` to `-32099`: Server error (node-specific)

use serde::{Deserialize, Serialize};

use super::{NodeRequest, TransportError};

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version. Always "2.0".
    pub jsonrpc: String,
    /// Request identifier. Echoed back in the response.
    pub id: serde_json::Value,
    /// The method to invoke.
    pub method: String,
    /// Method-specific parameters.
    #[serde(default)]
    pub params: serde_json::Value,
}

impl RpcRequest {
    /// Creates a new RPC request with the given method and parameters.
    pub fn new(id: serde_json::Value, method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.into(),
            params,
        }
    }

    /// Frames a node request under the given id.
    pub fn from_node_request(id: serde_json::Value, request: NodeRequest) -> Self {
        Self::new(id, request.bc_method, request.params)
    }
}

/// A JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// JSON-RPC version. Always "2.0".
    pub jsonrpc: String,
    /// The request ID this response corresponds to.
    pub id: serde_json::Value,
    /// The successful result, if the method completed without error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// The error, if the method failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    /// Unwraps the response into the node's result or a transport error.
    pub fn into_result(self) -> Result<serde_json::Value, TransportError> {
        match (self.result, self.error) {
            (_, Some(err)) => Err(TransportError::Rpc {
                code: err.code,
                message: err.message,
                data: err.data,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(TransportError::Decode(
                "response carries neither result nor error".to_string(),
            )),
        }
    }
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    /// Numeric error code.
    pub code: i32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional error data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
