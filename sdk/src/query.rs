//! # Query Facade
//!
//! Read-only pass-throughs to the node. Each method builds one
//! [`NodeRequest`] and returns the node's JSON answer as-is; nothing is
//! cached or interpreted.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::config::MethodNames;
use crate::transport::{NodeRequest, Transport, TransportError};

/// Chain and block queries.
#[derive(Clone)]
pub struct NodeQuery {
    transport: Arc<dyn Transport>,
    methods: MethodNames,
}

impl std::fmt::Debug for NodeQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeQuery")
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

impl NodeQuery {
    pub fn new(transport: Arc<dyn Transport>, methods: MethodNames) -> Self {
        Self { transport, methods }
    }

    /// The id of the chain the node serves.
    pub async fn chain_id(&self) -> Result<Value, TransportError> {
        self.call(&self.methods.get_chain_id, json!({})).await
    }

    /// General node information.
    pub async fn info(&self) -> Result<Value, TransportError> {
        self.call(&self.methods.get_info, json!({})).await
    }

    pub async fn latest_block(&self) -> Result<Value, TransportError> {
        self.call(&self.methods.get_latest_block, json!({})).await
    }

    /// The block at `height`.
    pub async fn block(&self, height: u64) -> Result<Value, TransportError> {
        self.call(&self.methods.get_block, json!({ "height": height }))
            .await
    }

    /// The transactions of the block at `height`.
    pub async fn block_txns(&self, height: u64) -> Result<Value, TransportError> {
        self.call(&self.methods.get_block_txns, json!({ "height": height }))
            .await
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        tracing::debug!(method, "querying node");
        self.transport.send(NodeRequest::new(method, params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct EchoTransport {
        requests: Mutex<Vec<NodeRequest>>,
    }

    #[async_trait]
    impl Transport for EchoTransport {
        async fn send(&self, request: NodeRequest) -> Result<Value, TransportError> {
            self.requests.lock().push(request.clone());
            Ok(json!({ "echo": request.bc_method }))
        }
    }

    fn query() -> (Arc<EchoTransport>, NodeQuery) {
        let transport = Arc::new(EchoTransport::default());
        let q = NodeQuery::new(transport.clone(), MethodNames::default());
        (transport, q)
    }

    #[tokio::test]
    async fn parameterless_queries_send_empty_params() {
        let (transport, q) = query();
        q.chain_id().await.unwrap();
        q.info().await.unwrap();
        q.latest_block().await.unwrap();

        let requests = transport.requests.lock();
        let methods: Vec<_> = requests.iter().map(|r| r.bc_method.as_str()).collect();
        assert_eq!(
            methods,
            vec![
                "gallactic.getChainId",
                "gallactic.getInfo",
                "gallactic.getLatestBlock"
            ]
        );
        assert!(requests.iter().all(|r| r.params == json!({})));
    }

    #[tokio::test]
    async fn block_queries_send_height() {
        let (transport, q) = query();
        q.block(12).await.unwrap();
        q.block_txns(13).await.unwrap();

        let requests = transport.requests.lock();
        assert_eq!(
            requests[0],
            NodeRequest::new("gallactic.getBlock", json!({ "height": 12 }))
        );
        assert_eq!(
            requests[1],
            NodeRequest::new("gallactic.getBlockTxs", json!({ "height": 13 }))
        );
    }

    #[tokio::test]
    async fn response_is_returned_unchanged() {
        let (_, q) = query();
        assert_eq!(
            q.info().await.unwrap(),
            json!({ "echo": "gallactic.getInfo" })
        );
    }
}
