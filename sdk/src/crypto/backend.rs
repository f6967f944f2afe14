//! # Crypto Backend
//!
//! The signing pipeline never calls ed25519-dalek, sha3 or bs58 directly.
//! It goes through [`CryptoBackend`], a small capability trait that covers
//! exactly what signing a transaction needs: decode a private key, derive
//! its public key, hash, sign, and encode the results.
//!
//! [`Ed25519Backend`] is the real thing. Tests and alternative signers
//! (hardware wallets, remote signers) substitute their own implementation.

use thiserror::Error;

use super::hash::keccak256;
use super::keys::{encode_tagged, GallacticKeypair, KeyError};

/// Length of the digests [`Ed25519Backend`] signs.
pub const DIGEST_LENGTH: usize = 32;

/// Errors during signing.
///
/// Deliberately says little about the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningError {
    #[error("private key could not be decoded: {0}")]
    InvalidPrivateKey(#[from] KeyError),

    #[error("signing primitive rejected the input: {0}")]
    Primitive(String),
}

/// The trusted crypto primitives the signing pipeline depends on.
pub trait CryptoBackend: Send + Sync {
    /// Decode a private key from its external encoding into raw key bytes.
    fn decode_private_key(&self, encoded: &str) -> Result<Vec<u8>, SigningError>;

    /// Derive the raw public key bytes for a raw private key.
    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>, SigningError>;

    /// Hash bytes with the chain's designated hash function.
    fn hash(&self, data: &[u8]) -> Vec<u8>;

    /// Sign a digest with a raw private key.
    fn sign(&self, digest: &[u8], private_key: &[u8]) -> Result<Vec<u8>, SigningError>;

    /// Encode bytes in the chain's external representation under a type tag.
    fn encode_tagged(&self, bytes: &[u8], tag: u8) -> String;

    /// Upper-case hex, the signature encoding the node expects.
    fn encode_hex_upper(&self, bytes: &[u8]) -> String {
        hex::encode_upper(bytes)
    }
}

/// Ed25519 signatures over Keccak-256 digests, base58 key encodings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Backend;

impl CryptoBackend for Ed25519Backend {
    fn decode_private_key(&self, encoded: &str) -> Result<Vec<u8>, SigningError> {
        let keypair = GallacticKeypair::from_base58(encoded)?;
        Ok(keypair.expanded_bytes().to_vec())
    }

    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>, SigningError> {
        let keypair = GallacticKeypair::from_secret_bytes(private_key)?;
        Ok(keypair.public_key_bytes().to_vec())
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        keccak256(data)
    }

    fn sign(&self, digest: &[u8], private_key: &[u8]) -> Result<Vec<u8>, SigningError> {
        let keypair = GallacticKeypair::from_secret_bytes(private_key)?;
        if digest.len() != DIGEST_LENGTH {
            return Err(SigningError::Primitive(format!(
                "expected a {DIGEST_LENGTH}-byte digest, got {} bytes",
                digest.len()
            )));
        }
        Ok(keypair.sign(digest).to_vec())
    }

    fn encode_tagged(&self, bytes: &[u8], tag: u8) -> String {
        encode_tagged(bytes, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PUBLIC_KEY_TYPE_TAG;
    use crate::crypto::keys::GallacticPublicKey;

    #[test]
    fn decode_then_sign_verifies() {
        let kp = GallacticKeypair::from_seed(&[9u8; 32]);
        let backend = Ed25519Backend;

        let raw = backend.decode_private_key(&kp.to_base58()).unwrap();
        let digest = backend.hash(b"message");
        let sig = backend.sign(&digest, &raw).unwrap();

        assert!(kp.verify(&digest, &sig));
    }

    #[test]
    fn derived_public_key_matches_keypair() {
        let kp = GallacticKeypair::from_seed(&[3u8; 32]);
        let backend = Ed25519Backend;
        let raw = backend.decode_private_key(&kp.to_base58()).unwrap();
        let public = backend.derive_public_key(&raw).unwrap();
        assert_eq!(public.as_slice(), kp.public_key_bytes().as_slice());

        let encoded = backend.encode_tagged(&public, PUBLIC_KEY_TYPE_TAG);
        assert_eq!(GallacticPublicKey::decode(&encoded).unwrap(), kp.public_key());
    }

    #[test]
    fn undecodable_key_is_a_signing_error() {
        let err = Ed25519Backend.decode_private_key("not base58 at all!").unwrap_err();
        assert_eq!(err, SigningError::InvalidPrivateKey(KeyError::InvalidEncoding));
    }

    #[test]
    fn sign_rejects_wrong_length_key() {
        let err = Ed25519Backend.sign(b"digest", &[0u8; 10]).unwrap_err();
        assert_eq!(err, SigningError::InvalidPrivateKey(KeyError::InvalidSecretKey));
    }

    #[test]
    fn hash_is_keccak256() {
        assert_eq!(
            hex::encode(Ed25519Backend.hash(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn sign_rejects_non_digest_input() {
        let kp = GallacticKeypair::from_seed(&[5u8; 32]);
        let raw = kp.expanded_bytes();
        let err = Ed25519Backend.sign(b"not a digest", &raw).unwrap_err();
        assert!(matches!(err, SigningError::Primitive(_)));
    }

    #[test]
    fn hex_is_upper_case() {
        assert_eq!(Ed25519Backend.encode_hex_upper(&[0xab, 0x0f]), "AB0F");
    }
}
