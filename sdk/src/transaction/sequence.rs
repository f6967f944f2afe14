//! Sequence stamping.
//!
//! Each signing entry of a transaction carries the account sequence it
//! consumes. Given the account's current sequence `S`, the entries are
//! numbered `S+1, S+2, ...` in order. Which entries sign depends on the type:
//! the `from` list of a `Send`, the single `caller` of a `Call`. Recipients
//! are never stamped.

use super::builder::TransactionDraft;
use super::error::TransactionError;
use super::types::TxBody;

/// Stamps sequences into the draft's signing entries, starting at `base + 1`.
///
/// Does nothing if the draft has no body. Running it twice with the same
/// base yields the same numbering. If the last entry's sequence would not
/// fit in a `u64`, returns [`TransactionError::SequenceOverflow`] and leaves
/// every entry as it was.
pub fn assign_sequence(draft: &mut TransactionDraft, base: u64) -> Result<(), TransactionError> {
    let Some(body) = draft.body_mut() else {
        return Ok(());
    };

    let entries = match &*body {
        TxBody::Send(send) => send.from.len(),
        TxBody::Call(_) => 1,
    };
    if entries == 0 {
        return Ok(());
    }
    let overflow = || TransactionError::SequenceOverflow { base, entries };
    let last = u64::try_from(entries)
        .ok()
        .and_then(|n| base.checked_add(n))
        .ok_or_else(overflow)?;

    match body {
        TxBody::Send(send) => {
            for (entry, sequence) in send.from.iter_mut().zip(base + 1..=last) {
                entry.sequence = Some(sequence);
            }
        }
        TxBody::Call(call) => call.caller.sequence = Some(last),
    }

    tracing::debug!(base, entries, last, "assigned sequences");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::types::ParticipantEntry;

    fn send_draft(inputs: usize, outputs: usize) -> TransactionDraft {
        let from = (0..inputs)
            .map(|i| ParticipantEntry::new(format!("F{i}"), 10))
            .collect();
        let to = (0..outputs)
            .map(|i| ParticipantEntry::new(format!("T{i}"), 10))
            .collect();
        let mut d = TransactionDraft::new();
        d.set_tx(TxBody::send(from, to));
        d
    }

    fn send_body(d: &TransactionDraft) -> &crate::transaction::types::SendTx {
        match d.body() {
            Some(TxBody::Send(s)) => s,
            other => panic!("expected send body, got {other:?}"),
        }
    }

    #[test]
    fn from_entries_numbered_consecutively() {
        let mut d = send_draft(3, 1);
        assign_sequence(&mut d, 5).unwrap();
        let seqs: Vec<_> = send_body(&d).from.iter().map(|e| e.sequence).collect();
        assert_eq!(seqs, vec![Some(6), Some(7), Some(8)]);
    }

    #[test]
    fn single_input_gets_next_sequence() {
        let mut d = send_draft(1, 1);
        assign_sequence(&mut d, 5).unwrap();
        assert_eq!(send_body(&d).from[0].sequence, Some(6));
    }

    #[test]
    fn recipients_are_not_stamped() {
        let mut d = send_draft(2, 3);
        assign_sequence(&mut d, 0).unwrap();
        assert!(send_body(&d).to.iter().all(|e| e.sequence.is_none()));
    }

    #[test]
    fn call_caller_is_stamped() {
        let mut d = TransactionDraft::new();
        d.set_tx(TxBody::call(ParticipantEntry::new("A1", 0), None, 1, 1, ""));
        assign_sequence(&mut d, 41).unwrap();
        match d.body() {
            Some(TxBody::Call(c)) => assert_eq!(c.caller.sequence, Some(42)),
            other => panic!("expected call body, got {other:?}"),
        }
    }

    #[test]
    fn stamping_is_deterministic() {
        let mut a = send_draft(4, 2);
        let mut b = a.clone();
        assign_sequence(&mut a, 100).unwrap();
        assign_sequence(&mut b, 100).unwrap();
        assign_sequence(&mut b, 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_draft_is_untouched() {
        let mut d = TransactionDraft::new();
        assign_sequence(&mut d, 1).unwrap();
        assert_eq!(d, TransactionDraft::new());
    }

    #[test]
    fn last_representable_sequence_is_assigned() {
        let mut d = send_draft(1, 1);
        assign_sequence(&mut d, u64::MAX - 1).unwrap();
        assert_eq!(send_body(&d).from[0].sequence, Some(u64::MAX));
    }

    #[test]
    fn overflow_is_rejected_without_stamping() {
        let mut d = send_draft(3, 1);
        let err = assign_sequence(&mut d, u64::MAX - 1).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::SequenceOverflow { base, entries: 3 } if base == u64::MAX - 1
        ));
        assert!(send_body(&d).from.iter().all(|e| e.sequence.is_none()));
    }

    #[test]
    fn call_at_max_base_overflows() {
        let mut d = TransactionDraft::new();
        d.set_tx(TxBody::call(ParticipantEntry::new("A1", 0), None, 1, 1, ""));
        assert!(assign_sequence(&mut d, u64::MAX).is_err());
    }
}
