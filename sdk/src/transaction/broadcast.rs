//! # Broadcast Orchestrator
//!
//! Turns a configured [`TransactionDraft`] into a signed
//! [`BroadcastEnvelope`] and hands it to the node. The steps run in a fixed
//! order and stop at the first failure:
//!
//! 1. Check the draft has a chain id, a sequence, and a body. Nothing is
//!    decoded, hashed, or sent before this passes.
//! 2. Derive the public key from the private key.
//! 3. Stamp sequences from the draft's base sequence.
//! 4. Sign the stamped draft.
//! 5. Validate the signatory set.
//! 6. Attach the signatories and assemble the envelope.
//! 7. Submit it; the node's response comes back unchanged.
//!
//! No retries. [`Broadcaster::prepare`] stops after step 6, for offline
//! signing.

use std::sync::Arc;

use super::builder::TransactionDraft;
use super::error::TransactionError;
use super::sequence::assign_sequence;
use super::signing;
use super::types::{BroadcastEnvelope, Signatory};
use super::validation::validate_signatories;
use crate::config::MethodNames;
use crate::crypto::{CryptoBackend, Ed25519Backend};
use crate::transport::{NodeRequest, Transport};

/// Signs drafts and submits them through a transport.
///
/// Holds no per-transaction state, so one broadcaster can serve any number
/// of drafts. Callers sending several transactions from the same account
/// are responsible for allocating sequences between them.
#[derive(Clone)]
pub struct Broadcaster {
    transport: Arc<dyn Transport>,
    crypto: Arc<dyn CryptoBackend>,
    methods: MethodNames,
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcaster")
            .field("broadcast_method", &self.methods.broadcast_txn)
            .finish_non_exhaustive()
    }
}

impl Broadcaster {
    /// A broadcaster using the default Ed25519 backend.
    pub fn new(transport: Arc<dyn Transport>, methods: MethodNames) -> Self {
        Self::with_crypto(transport, Arc::new(Ed25519Backend), methods)
    }

    /// A broadcaster with an explicit crypto backend.
    pub fn with_crypto(
        transport: Arc<dyn Transport>,
        crypto: Arc<dyn CryptoBackend>,
        methods: MethodNames,
    ) -> Self {
        Self {
            transport,
            crypto,
            methods,
        }
    }

    /// Stamps, signs, and validates the draft, and returns the envelope that
    /// would be sent. Touches no network.
    ///
    /// On success the draft carries the stamped sequences and the new
    /// signatories. Any signatories from an earlier attempt are dropped as
    /// soon as the preconditions pass.
    pub fn prepare(
        &self,
        draft: &mut TransactionDraft,
        private_key: &str,
    ) -> Result<BroadcastEnvelope, TransactionError> {
        let (chain_id, base) = match (draft.chain_id(), draft.sequence()) {
            (Some(chain_id), Some(base)) => (chain_id.to_string(), base),
            _ => return Err(TransactionError::MissingChainContext),
        };
        if draft.body().is_none() {
            return Err(TransactionError::MissingTransaction);
        }
        draft.clear_signatories();

        let public_key = signing::public_key(self.crypto.as_ref(), private_key)?;

        assign_sequence(draft, base)?;

        let signature = signing::sign(self.crypto.as_ref(), private_key, draft)?;
        let signatories = vec![Signatory {
            public_key,
            signature,
        }];
        validate_signatories(Some(signatories.as_slice()))?;
        draft.attach_signatories(signatories.clone());

        let tx = draft
            .body()
            .cloned()
            .ok_or(TransactionError::MissingTransaction)?;
        let envelope = BroadcastEnvelope {
            chain_id,
            tx_type: tx.tx_type(),
            tx,
            signatories,
        };

        tracing::info!(
            chain_id = %envelope.chain_id,
            tx_type = %envelope.tx_type,
            public_key = %envelope.signatories[0].public_key,
            "transaction signed"
        );
        Ok(envelope)
    }

    /// Submits an already signed envelope.
    ///
    /// The signatories are validated again so an envelope assembled by hand
    /// cannot go out unsigned.
    pub async fn submit(
        &self,
        envelope: &BroadcastEnvelope,
    ) -> Result<serde_json::Value, TransactionError> {
        validate_signatories(Some(envelope.signatories.as_slice()))?;

        let params = serde_json::to_value(envelope)?;
        let request = NodeRequest::new(self.methods.broadcast_txn.clone(), params);

        match self.transport.send(request).await {
            Ok(response) => {
                tracing::info!(chain_id = %envelope.chain_id, "transaction broadcast");
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(chain_id = %envelope.chain_id, error = %e, "broadcast failed");
                Err(e.into())
            }
        }
    }

    /// [`prepare`](Self::prepare) followed by [`submit`](Self::submit).
    pub async fn broadcast(
        &self,
        draft: &mut TransactionDraft,
        private_key: &str,
    ) -> Result<serde_json::Value, TransactionError> {
        let envelope = self.prepare(draft, private_key)?;
        self.submit(&envelope).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
