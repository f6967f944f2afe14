//! Errors raised while building, signing, and broadcasting a transaction.
//!
//! Everything except [`TransactionError::Transport`] is raised before the
//! network is touched. A failed precondition stops the pipeline at that
//! step; nothing is retried.

use thiserror::Error;

use crate::crypto::SigningError;
use crate::transport::TransportError;
use crate::units::AmountError;

#[derive(Debug, Error)]
pub enum TransactionError {
    /// An amount was missing or could not be expressed in bosons.
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// A required participant field was missing. `field` names it, e.g.
    /// `from.address`.
    #[error("cannot build transaction: {field} is missing or invalid")]
    InvalidParticipant { field: String },

    /// Chain id or sequence was not set on the draft.
    #[error("chain id or sequence is not set, unable to proceed")]
    MissingChainContext,

    /// Numbering `entries` signing entries after `base` would pass
    /// `u64::MAX`.
    #[error("sequence overflow: base {base} cannot number {entries} entries")]
    SequenceOverflow { base: u64, entries: usize },

    /// No payload was set on the draft.
    #[error("transaction type and body are not set")]
    MissingTransaction,

    /// The private key could not be used.
    #[error("signing failed: {0}")]
    Signing(#[from] SigningError),

    /// The signatory set was absent, empty, or incomplete.
    #[error("signatories with a public key and signature are required: {reason}")]
    InvalidSignatories { reason: String },

    /// The signing message could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The transport failed. Passed through untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
