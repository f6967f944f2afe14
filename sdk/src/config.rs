//! # SDK Configuration & Constants
//!
//! Every protocol constant the SDK depends on lives here, along with the
//! [`SdkConfig`] a client is built from. The node expects these values
//! exactly; changing a method name or the public-key tag means talking a
//! different dialect, and the node will answer accordingly (usually with an
//! error).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::units::Unit;

// ---------------------------------------------------------------------------
// Protocol Constants
// ---------------------------------------------------------------------------

/// Type-tag byte prepended to a public key before base58-check encoding.
/// The node uses this tag to tell public keys apart from addresses and
/// private keys, so it is fixed by the protocol and never caller-supplied.
pub const PUBLIC_KEY_TYPE_TAG: u8 = 4;

/// Ed25519 secret seed length in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Length of an "expanded" private key: 32-byte seed followed by the
/// 32-byte public key. Tendermint-style tooling exports keys in this form.
pub const EXPANDED_SECRET_KEY_LENGTH: usize = 64;

/// Ed25519 signature length. Always 64 bytes.
pub const SIGNATURE_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Client Defaults
// ---------------------------------------------------------------------------

/// Default JSON-RPC endpoint of a locally running node.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:1337";

/// How long the HTTP transport waits for a node response.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Unit assumed for caller-supplied amounts when none is given.
pub const DEFAULT_UNIT: Unit = Unit::Standard;

// ---------------------------------------------------------------------------
// Method Names
// ---------------------------------------------------------------------------

/// JSON-RPC method names understood by the node.
///
/// Kept as data rather than hard-coded strings so a client can talk to a
/// node with a different method prefix without patching the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodNames {
    /// Returns the chain id of the connected network.
    pub get_chain_id: String,
    /// Returns node information (latest block, version, ...).
    pub get_info: String,
    /// Returns the latest block.
    pub get_latest_block: String,
    /// Returns a block at a given height.
    pub get_block: String,
    /// Returns the transactions of a block at a given height.
    pub get_block_txns: String,
    /// Submits a signed transaction envelope.
    pub broadcast_txn: String,
}

impl Default for MethodNames {
    fn default() -> Self {
        Self {
            get_chain_id: "gallactic.getChainId".to_string(),
            get_info: "gallactic.getInfo".to_string(),
            get_latest_block: "gallactic.getLatestBlock".to_string(),
            get_block: "gallactic.getBlock".to_string(),
            get_block_txns: "gallactic.getBlockTxs".to_string(),
            broadcast_txn: "gallactic.broadcastTx".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// SdkConfig
// ---------------------------------------------------------------------------

/// Everything a [`GallacticClient`](crate::client::GallacticClient) needs to
/// know before it can talk to a node.
///
/// ```
/// use gallactic_sdk::config::SdkConfig;
/// use gallactic_sdk::units::Unit;
///
/// let config = SdkConfig::default()
///     .with_rpc_url("http://node.example:1337")
///     .with_chain_id("gallactic-testnet")
///     .with_default_unit(Unit::Boson);
/// assert_eq!(config.chain_id.as_deref(), Some("gallactic-testnet"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// JSON-RPC endpoint of the node.
    pub rpc_url: String,
    /// Chain id pre-set on drafts created by the client. `None` means the
    /// caller sets it per draft (or asks the node first).
    pub chain_id: Option<String>,
    /// Unit pre-set on drafts created by the client.
    pub default_unit: Unit,
    /// Per-request timeout for the HTTP transport.
    pub request_timeout: Duration,
    /// JSON-RPC method names.
    pub methods: MethodNames,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            chain_id: None,
            default_unit: DEFAULT_UNIT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            methods: MethodNames::default(),
        }
    }
}

impl SdkConfig {
    /// Sets the node endpoint.
    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = url.into();
        self
    }

    /// Sets the chain id pre-set on new drafts.
    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    /// Sets the unit pre-set on new drafts.
    pub fn with_default_unit(mut self, unit: Unit) -> Self {
        self.default_unit = unit;
        self
    }

    /// Sets the HTTP request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Replaces the method-name table.
    pub fn with_methods(mut self, methods: MethodNames) -> Self {
        self.methods = methods;
        self
    }
}
