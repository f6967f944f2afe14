//! Core type definitions for Gallactic transactions.
//!
//! These are wire types: their serde representation is exactly what the
//! node receives, field names and order included. Optional fields that are
//! unset are omitted rather than sent as `null`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::DisplayAmount;

// ---------------------------------------------------------------------------
// TxType
// ---------------------------------------------------------------------------

/// The kind of transaction. Always derived from the [`TxBody`] variant, so
/// a draft can never carry a type that disagrees with its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxType {
    /// Value transfer from one or more inputs to one or more outputs.
    Send,
    /// Contract call (or contract creation when no address is given).
    Call,
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Send => write!(f, "Send"),
            Self::Call => write!(f, "Call"),
        }
    }
}

// ---------------------------------------------------------------------------
// Participants
// ---------------------------------------------------------------------------

/// Which side of a transfer a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Spends funds. Must name an address.
    From,
    /// Receives funds. The address may be left for the node to fill in.
    To,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => write!(f, "from"),
            Self::To => write!(f, "to"),
        }
    }
}

/// A participant as the caller describes it: display-unit amount, possibly
/// incomplete. Turned into a [`ParticipantEntry`] by
/// [`TransactionDraft::build_from_participant`](super::TransactionDraft::build_from_participant).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    pub address: Option<String>,
    pub amount: Option<DisplayAmount>,
}

impl Participant {
    /// A participant with both fields set.
    pub fn new(address: impl Into<String>, amount: impl Into<DisplayAmount>) -> Self {
        Self {
            address: Some(address.into()),
            amount: Some(amount.into()),
        }
    }

    /// A recipient without an address.
    pub fn amount_only(amount: impl Into<DisplayAmount>) -> Self {
        Self {
            address: None,
            amount: Some(amount.into()),
        }
    }
}

/// One input or output of a transaction, amount in bosons.
///
/// `sequence` stays `None` until the broadcast stamps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
}

impl ParticipantEntry {
    /// An entry with an address and no sequence yet.
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            address: Some(address.into()),
            amount,
            sequence: None,
        }
    }
}

// ---------------------------------------------------------------------------
// TxBody
// ---------------------------------------------------------------------------

/// Payload of a `Send` transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTx {
    pub from: Vec<ParticipantEntry>,
    pub to: Vec<ParticipantEntry>,
}

/// Payload of a `Call` transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallTx {
    pub caller: ParticipantEntry,
    /// Contract address. `None` deploys `data` as a new contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub gas_limit: u64,
    pub fee: u64,
    /// Hex-encoded call data or contract bytecode.
    pub data: String,
}

/// The type-specific payload. Serialized without a tag: the type travels
/// next to it as [`TxType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TxBody {
    Send(SendTx),
    Call(CallTx),
}

impl TxBody {
    /// A `Send` payload.
    pub fn send(from: Vec<ParticipantEntry>, to: Vec<ParticipantEntry>) -> Self {
        Self::Send(SendTx { from, to })
    }

    /// A `Call` payload.
    pub fn call(
        caller: ParticipantEntry,
        address: Option<String>,
        gas_limit: u64,
        fee: u64,
        data: impl Into<String>,
    ) -> Self {
        Self::Call(CallTx {
            caller,
            address,
            gas_limit,
            fee,
            data: data.into(),
        })
    }

    /// The transaction kind this payload belongs to.
    pub fn tx_type(&self) -> TxType {
        match self {
            Self::Send(_) => TxType::Send,
            Self::Call(_) => TxType::Call,
        }
    }
}

// ---------------------------------------------------------------------------
// Signatories and envelope
// ---------------------------------------------------------------------------

/// A (public key, signature) pair authorizing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signatory {
    /// Tagged base58-check public key.
    pub public_key: String,
    /// Upper-case hex signature.
    pub signature: String,
}

/// The fully signed payload handed to the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastEnvelope {
    pub chain_id: String,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub tx: TxBody,
    pub signatories: Vec<Signatory>,
}
