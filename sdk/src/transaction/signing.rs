//! Transaction signing.
//!
//! The signing message is the JSON serialization of `{chainId, type, tx}`,
//! in that field order, built fresh from the draft on every call. It is
//! computed after sequence stamping, so the sequences are covered by the
//! signature.
//!
//! The procedure:
//! 1. Serialize the signing message.
//! 2. Decode the private key through the [`CryptoBackend`].
//! 3. Hash the message.
//! 4. Sign the digest and encode the signature as upper-case hex.
//!
//! Nothing here has state. Signing the same stamped draft with the same key
//! always produces the same signature.

use serde::Serialize;

use super::builder::TransactionDraft;
use super::error::TransactionError;
use super::types::{TxBody, TxType};
use crate::config::PUBLIC_KEY_TYPE_TAG;
use crate::crypto::CryptoBackend;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SigningMessage<'a> {
    chain_id: &'a str,
    #[serde(rename = "type")]
    tx_type: TxType,
    tx: &'a TxBody,
}

/// The canonical bytes a signature covers.
///
/// Fails with [`TransactionError::MissingChainContext`] if no chain id is
/// set and [`TransactionError::MissingTransaction`] if there is no body.
pub fn signing_message(draft: &TransactionDraft) -> Result<Vec<u8>, TransactionError> {
    let chain_id = draft
        .chain_id()
        .ok_or(TransactionError::MissingChainContext)?;
    let body = draft.body().ok_or(TransactionError::MissingTransaction)?;

    let message = SigningMessage {
        chain_id,
        tx_type: body.tx_type(),
        tx: body,
    };
    Ok(serde_json::to_vec(&message)?)
}

/// Signs the draft's current state and returns the upper-case hex signature.
///
/// The draft is not modified.
pub fn sign(
    crypto: &dyn CryptoBackend,
    private_key: &str,
    draft: &TransactionDraft,
) -> Result<String, TransactionError> {
    let message = signing_message(draft)?;
    let key = crypto.decode_private_key(private_key)?;
    let digest = crypto.hash(&message);
    let signature = crypto.sign(&digest, &key)?;
    Ok(crypto.encode_hex_upper(&signature))
}

/// The tagged public key string for a private key.
pub fn public_key(crypto: &dyn CryptoBackend, private_key: &str) -> Result<String, TransactionError> {
    let key = crypto.decode_private_key(private_key)?;
    let public = crypto.derive_public_key(&key)?;
    Ok(crypto.encode_tagged(&public, PUBLIC_KEY_TYPE_TAG))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
