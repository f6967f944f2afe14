//! # Client
//!
//! One handle over a transport and a configuration. Hands out the query
//! facade, the broadcaster, and drafts pre-filled from the configuration.
//!
//! ```no_run
//! use gallactic_sdk::{GallacticClient, SdkConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GallacticClient::new(SdkConfig::default())?;
//! let info = client.query().info().await?;
//! println!("{info}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::config::SdkConfig;
use crate::crypto::CryptoBackend;
use crate::query::NodeQuery;
use crate::transaction::{Broadcaster, TransactionDraft};
use crate::transport::{HttpTransport, Transport, TransportError};

#[derive(Debug, Clone)]
pub struct GallacticClient {
    config: SdkConfig,
    query: NodeQuery,
    broadcaster: Broadcaster,
}

impl GallacticClient {
    /// A client talking JSON-RPC over HTTP to `config.rpc_url`.
    pub fn new(config: SdkConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::from_config(&config)?;
        tracing::debug!(url = %config.rpc_url, "created http transport");
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// A client over any transport.
    pub fn with_transport(config: SdkConfig, transport: Arc<dyn Transport>) -> Self {
        let query = NodeQuery::new(transport.clone(), config.methods.clone());
        let broadcaster = Broadcaster::new(transport, config.methods.clone());
        Self {
            config,
            query,
            broadcaster,
        }
    }

    /// A client over any transport, signing through `crypto`.
    pub fn with_crypto(
        config: SdkConfig,
        transport: Arc<dyn Transport>,
        crypto: Arc<dyn CryptoBackend>,
    ) -> Self {
        let query = NodeQuery::new(transport.clone(), config.methods.clone());
        let broadcaster = Broadcaster::with_crypto(transport, crypto, config.methods.clone());
        Self {
            config,
            query,
            broadcaster,
        }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn query(&self) -> &NodeQuery {
        &self.query
    }

    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// An empty draft in the configured unit, with the configured chain id
    /// if there is one.
    pub fn draft(&self) -> TransactionDraft {
        let mut draft = TransactionDraft::new().with_unit(self.config.default_unit);
        if let Some(chain_id) = &self.config.chain_id {
            draft.set_chain_id(chain_id.clone());
        }
        draft
    }
}
