//! Transaction drafts.
//!
//! A [`TransactionDraft`] accumulates everything a broadcast needs: the
//! payload, the chain id, the account sequence, and the unit caller amounts
//! are expressed in. Setters never validate; the broadcast checks the whole
//! draft at once, right before it starts mutating anything.
//!
//! The type and the payload are one value ([`TxBody`]), so "type set but no
//! body" is not a state a draft can be in.

use super::error::TransactionError;
use super::types::{Participant, ParticipantEntry, Role, Signatory, TxBody, TxType};
use crate::config::DEFAULT_UNIT;
use crate::units::{to_base_unit, Unit};

/// A transaction under construction.
///
/// Owned by exactly one workflow. Broadcasting takes `&mut self`, stamps
/// sequences into the body and attaches the signatories, after which the
/// draft is spent.
///
/// ```
/// use gallactic_sdk::transaction::{Participant, Role, TransactionDraft, TxBody};
/// use gallactic_sdk::units::Unit;
///
/// let mut draft = TransactionDraft::new().with_unit(Unit::Standard);
/// let from = draft.build_from_participant(Role::From, Participant::new("A1", 100u64)).unwrap();
/// let to = draft.build_from_participant(Role::To, Participant::new("A2", 100u64)).unwrap();
/// draft.set_tx(TxBody::send(vec![from], vec![to]));
/// draft.set_chain_id("chain-1");
/// draft.set_sequence(5);
/// assert_eq!(draft.tx_type().unwrap().to_string(), "Send");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    body: Option<TxBody>,
    chain_id: Option<String>,
    sequence: Option<u64>,
    unit: Unit,
    signatories: Option<Vec<Signatory>>,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionDraft {
    /// An empty draft using the default unit.
    pub fn new() -> Self {
        Self {
            body: None,
            chain_id: None,
            sequence: None,
            unit: DEFAULT_UNIT,
            signatories: None,
        }
    }

    /// Sets the unit and returns the draft, for construction chains.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the transaction kind and its payload together.
    pub fn set_tx(&mut self, body: TxBody) {
        self.body = Some(body);
    }

    /// Sets the target chain.
    pub fn set_chain_id(&mut self, chain_id: impl Into<String>) {
        self.chain_id = Some(chain_id.into());
    }

    /// Sets the account's current sequence. Entries are stamped from
    /// `sequence + 1` at broadcast time.
    pub fn set_sequence(&mut self, sequence: u64) {
        self.sequence = Some(sequence);
    }

    /// Sets the unit used by [`build_from_participant`](Self::build_from_participant).
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    pub fn tx_type(&self) -> Option<TxType> {
        self.body.as_ref().map(TxBody::tx_type)
    }

    pub fn body(&self) -> Option<&TxBody> {
        self.body.as_ref()
    }

    pub(crate) fn body_mut(&mut self) -> Option<&mut TxBody> {
        self.body.as_mut()
    }

    pub fn chain_id(&self) -> Option<&str> {
        self.chain_id.as_deref()
    }

    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Signatories attached by the last successful signing. Read-only: only
    /// the broadcast pipeline sets them.
    pub fn signatories(&self) -> Option<&[Signatory]> {
        self.signatories.as_deref()
    }

    pub(crate) fn attach_signatories(&mut self, signatories: Vec<Signatory>) {
        self.signatories = Some(signatories);
    }

    pub(crate) fn clear_signatories(&mut self) {
        self.signatories = None;
    }

    /// Validates a caller-supplied participant and converts its amount to
    /// bosons using the draft's unit.
    pub fn build_from_participant(
        &self,
        role: Role,
        participant: Participant,
    ) -> Result<ParticipantEntry, TransactionError> {
        build_from_participant_in(role, participant, self.unit)
    }
}

/// Validates a participant and converts its amount using an explicit unit.
///
/// - `From` needs a non-empty address and an amount.
/// - `To` needs an amount; the address may be absent.
pub fn build_from_participant_in(
    role: Role,
    participant: Participant,
    unit: Unit,
) -> Result<ParticipantEntry, TransactionError> {
    let Participant { address, amount } = participant;

    if role == Role::From && address.as_deref().map_or(true, |a| a.trim().is_empty()) {
        return Err(TransactionError::InvalidParticipant {
            field: format!("{role}.address"),
        });
    }
    if amount.is_none() {
        return Err(TransactionError::InvalidParticipant {
            field: format!("{role}.amount"),
        });
    }

    Ok(ParticipantEntry {
        address,
        amount: to_base_unit(amount, unit)?,
        sequence: None,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AmountError, DisplayAmount};

    #[test]
    fn new_draft_is_empty_with_default_unit() {
        let d = TransactionDraft::new();
        assert!(d.body().is_none());
        assert!(d.tx_type().is_none());
        assert!(d.chain_id().is_none());
        assert!(d.sequence().is_none());
        assert!(d.signatories().is_none());
        assert_eq!(d.unit(), DEFAULT_UNIT);
    }

    #[test]
    fn set_tx_sets_type_and_body_together() {
        let mut d = TransactionDraft::new();
        d.set_tx(TxBody::send(vec![ParticipantEntry::new("A1", 1)], vec![]));
        assert_eq!(d.tx_type(), Some(TxType::Send));
        assert!(d.body().is_some());

        d.set_tx(TxBody::call(ParticipantEntry::new("A1", 1), None, 1, 1, ""));
        assert_eq!(d.tx_type(), Some(TxType::Call));
    }

    #[test]
    fn setters_do_not_validate() {
        let mut d = TransactionDraft::new();
        d.set_chain_id("");
        d.set_sequence(0);
        assert_eq!(d.chain_id(), Some(""));
        assert_eq!(d.sequence(), Some(0));
    }

    #[test]
    fn from_participant_converts_amount() {
        let d = TransactionDraft::new().with_unit(Unit::Standard);
        let entry = d
            .build_from_participant(Role::From, Participant::new("A1", 100u64))
            .unwrap();
        assert_eq!(entry.address.as_deref(), Some("A1"));
        assert_eq!(entry.amount, 10_000_000_000);
        assert_eq!(entry.sequence, None);
    }

    #[test]
    fn from_participant_requires_address() {
        let d = TransactionDraft::new();
        for address in [None, Some(String::new()), Some("   ".to_string())] {
            let p = Participant {
                address,
                amount: Some(DisplayAmount::Integer(1)),
            };
            match d.build_from_participant(Role::From, p) {
                Err(TransactionError::InvalidParticipant { field }) => {
                    assert_eq!(field, "from.address")
                }
                other => panic!("unexpected: {other:?}"),
            }
        }
    }

    #[test]
    fn from_participant_requires_amount() {
        let d = TransactionDraft::new();
        let p = Participant {
            address: Some("A1".into()),
            amount: None,
        };
        match d.build_from_participant(Role::From, p) {
            Err(TransactionError::InvalidParticipant { field }) => assert_eq!(field, "from.amount"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn to_participant_address_optional_amount_required() {
        let d = TransactionDraft::new().with_unit(Unit::Boson);
        let entry = d
            .build_from_participant(Role::To, Participant::amount_only(250u64))
            .unwrap();
        assert_eq!(entry.address, None);
        assert_eq!(entry.amount, 250);

        match d.build_from_participant(Role::To, Participant::default()) {
            Err(TransactionError::InvalidParticipant { field }) => assert_eq!(field, "to.amount"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unconvertible_amount_is_invalid_amount() {
        let d = TransactionDraft::new();
        let err = d
            .build_from_participant(Role::To, Participant::amount_only("twelve"))
            .unwrap_err();
        assert!(matches!(
            err,
            TransactionError::InvalidAmount(AmountError::NotNumeric(_))
        ));
    }

    #[test]
    fn explicit_unit_overrides_draft_unit() {
        let entry =
            build_from_participant_in(Role::To, Participant::amount_only("1.5"), Unit::Milli)
                .unwrap();
        assert_eq!(entry.amount, 150_000);
    }
}
