//! # Key Management
//!
//! Ed25519 keypairs and their external encodings.
//!
//! Gallactic tooling hands private keys around as base58 strings, either the
//! bare 32-byte seed or the 64-byte "expanded" form (seed followed by the
//! public key). Public keys travel as base58-check strings carrying the
//! protocol type tag, so a node can tell a public key from an address at a
//! glance.
//!
//! Key bytes are never logged. `Debug` on a keypair prints the public key
//! only.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use super::hash::checksum;
use crate::config::{
    EXPANDED_SECRET_KEY_LENGTH, PUBLIC_KEY_TYPE_TAG, SECRET_KEY_LENGTH, SIGNATURE_LENGTH,
};

/// Errors that can occur during key operations.
///
/// Deliberately terse: an error message is a poor place to describe what
/// was wrong with somebody's secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: wrong length or not a valid scalar")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,

    #[error("keypair validation failed: public key does not match secret key")]
    KeypairMismatch,

    #[error("invalid base58 encoding")]
    InvalidEncoding,

    #[error("unexpected type tag {found}, expected {expected}")]
    WrongTypeTag { expected: u8, found: u8 },

    #[error("base58-check checksum mismatch")]
    ChecksumMismatch,
}

// ---------------------------------------------------------------------------
// Tagged base58-check
// ---------------------------------------------------------------------------

/// Encodes `tag || bytes || checksum(tag || bytes)` as base58.
pub fn encode_tagged(bytes: &[u8], tag: u8) -> String {
    let mut buf = Vec::with_capacity(bytes.len() + 5);
    buf.push(tag);
    buf.extend_from_slice(bytes);
    let sum = checksum(&buf);
    buf.extend_from_slice(&sum);
    bs58::encode(buf).into_string()
}

/// Reverses [`encode_tagged`], checking both the tag and the checksum.
pub fn decode_tagged(encoded: &str, tag: u8) -> Result<Vec<u8>, KeyError> {
    let raw = bs58::decode(encoded.trim())
        .into_vec()
        .map_err(|_| KeyError::InvalidEncoding)?;
    if raw.len() < 5 {
        return Err(KeyError::InvalidEncoding);
    }
    let (body, sum) = raw.split_at(raw.len() - 4);
    if checksum(body).as_slice() != sum {
        return Err(KeyError::ChecksumMismatch);
    }
    if body[0] != tag {
        return Err(KeyError::WrongTypeTag {
            expected: tag,
            found: body[0],
        });
    }
    Ok(body[1..].to_vec())
}

// ---------------------------------------------------------------------------
// GallacticKeypair
// ---------------------------------------------------------------------------

/// An Ed25519 signing key together with its public half.
///
/// `GallacticKeypair` intentionally does not implement `Serialize`. Writing
/// a private key somewhere should be a deliberate call to
/// [`to_base58`](Self::to_base58), not a side effect of logging a struct.
///
/// # Examples
///
/// ```
/// use gallactic_sdk::crypto::GallacticKeypair;
///
/// let kp = GallacticKeypair::generate();
/// let restored = GallacticKeypair::from_base58(&kp.to_base58()).unwrap();
/// assert_eq!(kp.public_key(), restored.public_key());
/// ```
pub struct GallacticKeypair {
    signing_key: SigningKey,
}

/// The public half of a keypair.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GallacticPublicKey {
    bytes: [u8; 32],
}

impl GallacticKeypair {
    /// Generate a fresh keypair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Constructs a keypair deterministically from a 32-byte seed.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstruct a keypair from raw secret material.
    ///
    /// Accepts either the 32-byte seed or the 64-byte expanded form. For the
    /// expanded form, the trailing public key must match the one derived from
    /// the seed; a mismatch means the key was corrupted or spliced together.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        match bytes.len() {
            SECRET_KEY_LENGTH => {
                let mut seed = [0u8; SECRET_KEY_LENGTH];
                seed.copy_from_slice(bytes);
                Ok(Self::from_seed(&seed))
            }
            EXPANDED_SECRET_KEY_LENGTH => {
                let (seed_bytes, public_bytes) = bytes.split_at(SECRET_KEY_LENGTH);
                let mut seed = [0u8; SECRET_KEY_LENGTH];
                seed.copy_from_slice(seed_bytes);
                let kp = Self::from_seed(&seed);
                if kp.public_key_bytes().as_slice() != public_bytes {
                    return Err(KeyError::KeypairMismatch);
                }
                Ok(kp)
            }
            _ => Err(KeyError::InvalidSecretKey),
        }
    }

    /// Decode a base58 private key (seed or expanded form).
    pub fn from_base58(encoded: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(encoded.trim())
            .into_vec()
            .map_err(|_| KeyError::InvalidEncoding)?;
        Self::from_secret_bytes(&bytes)
    }

    /// Export the private key as base58 in the 64-byte expanded form.
    ///
    /// **Handle with care.** Whoever holds this string controls the account.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.expanded_bytes()).into_string()
    }

    /// Seed followed by public key.
    pub fn expanded_bytes(&self) -> [u8; EXPANDED_SECRET_KEY_LENGTH] {
        let mut out = [0u8; EXPANDED_SECRET_KEY_LENGTH];
        out[..SECRET_KEY_LENGTH].copy_from_slice(&self.signing_key.to_bytes());
        out[SECRET_KEY_LENGTH..].copy_from_slice(&self.public_key_bytes());
        out
    }

    /// Returns the public key associated with this keypair.
    pub fn public_key(&self) -> GallacticPublicKey {
        GallacticPublicKey {
            bytes: self.public_key_bytes(),
        }
    }

    /// Raw 32-byte public key.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign a message. Ed25519 is deterministic: same key and message, same
    /// 64 bytes, every time.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Verify a signature against this keypair's public key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        self.public_key().verify(message, signature)
    }
}

impl Clone for GallacticKeypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for GallacticKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GallacticKeypair(pub={})", self.public_key().to_hex())
    }
}

// ---------------------------------------------------------------------------
// GallacticPublicKey
// ---------------------------------------------------------------------------

impl GallacticPublicKey {
    /// Try to create a public key from a byte slice, validating that the
    /// bytes are a point on the curve.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; 32] = slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// Parse the tagged base58-check form produced by [`encode`](Self::encode).
    pub fn decode(encoded: &str) -> Result<Self, KeyError> {
        let bytes = decode_tagged(encoded, PUBLIC_KEY_TYPE_TAG)?;
        Self::try_from_slice(&bytes)
    }

    /// Tagged base58-check form, as the node expects it in a signatory.
    pub fn encode(&self) -> String {
        encode_tagged(&self.bytes, PUBLIC_KEY_TYPE_TAG)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Hex-encoded representation. Handy for logs.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Verify a signature. Any malformed input is simply `false`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let Ok(sig_bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(signature) else {
            return false;
        };
        verifying_key
            .verify(message, &DalekSignature::from_bytes(&sig_bytes))
            .is_ok()
    }
}

impl fmt::Display for GallacticPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for GallacticPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GallacticPublicKey({})", &self.to_hex()[..16])
    }
}
