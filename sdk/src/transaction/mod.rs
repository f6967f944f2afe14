//! # Transaction Module
//!
//! Construction, signing, and broadcast of Gallactic transactions.
//!
//! ## Architecture
//!
//! ```text
//! types.rs      - Wire types (TxType, TxBody, ParticipantEntry, Signatory, BroadcastEnvelope)
//! builder.rs    - TransactionDraft and participant validation
//! sequence.rs   - Sequence stamping of signing entries
//! signing.rs    - Canonical signing message and signatures
//! validation.rs - Structural checks on signatory sets
//! broadcast.rs  - The Broadcaster tying it all together
//! error.rs      - TransactionError
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: Fill a [`TransactionDraft`], converting caller amounts with
//!    [`TransactionDraft::build_from_participant`].
//! 2. **Stamp**: [`assign_sequence`] numbers the signing entries.
//! 3. **Sign**: [`sign`] covers `{chainId, type, tx}` after stamping.
//! 4. **Broadcast**: [`Broadcaster::broadcast`] runs 2 and 3, validates the
//!    signatories, and submits the envelope.
//!
//! ## Design Decisions
//!
//! - All amounts on the wire are `u64` bosons. Display amounts never reach
//!   the signing message.
//! - A draft's type is derived from its body, never set on its own.
//! - Signatories are attached only by the broadcaster and only after they
//!   pass validation.

pub mod broadcast;
pub mod builder;
pub mod error;
pub mod sequence;
pub mod signing;
pub mod types;
pub mod validation;

pub use broadcast::Broadcaster;
pub use builder::{build_from_participant_in, TransactionDraft};
pub use error::TransactionError;
pub use sequence::assign_sequence;
pub use signing::{public_key, sign, signing_message};
pub use types::{
    BroadcastEnvelope, CallTx, Participant, ParticipantEntry, Role, SendTx, Signatory, TxBody,
    TxType,
};
pub use validation::validate_signatories;
