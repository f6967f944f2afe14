//! Structural checks on a signatory set.
//!
//! Whether a signature actually verifies is the node's call. This only makes
//! sure an envelope is never sent without at least one complete signatory.

use super::error::TransactionError;
use super::types::Signatory;

/// Fails unless `signatories` is present, non-empty, and every entry has
/// both a public key and a signature.
pub fn validate_signatories(signatories: Option<&[Signatory]>) -> Result<(), TransactionError> {
    let signatories = signatories.ok_or_else(|| TransactionError::InvalidSignatories {
        reason: "no signatories attached".to_string(),
    })?;

    if signatories.is_empty() {
        return Err(TransactionError::InvalidSignatories {
            reason: "signatory list is empty".to_string(),
        });
    }

    for (i, s) in signatories.iter().enumerate() {
        if s.public_key.is_empty() {
            return Err(TransactionError::InvalidSignatories {
                reason: format!("signatory {i} has no public key"),
            });
        }
        if s.signature.is_empty() {
            return Err(TransactionError::InvalidSignatories {
                reason: format!("signatory {i} has no signature"),
            });
        }
    }

    Ok(())
}
