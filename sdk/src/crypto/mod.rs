//! # Cryptographic Primitives
//!
//! Everything the SDK signs goes through this module. The primitives are
//! boring on purpose: Ed25519 signatures, Keccak-256 digests, base58 key
//! encodings. All of it is a thin wrapper around audited crates.
//!
//! The signing pipeline depends on the [`CryptoBackend`] trait rather than
//! on these functions directly, so a test double or a hardware signer can
//! stand in for [`Ed25519Backend`].

pub mod backend;
pub mod hash;
pub mod keys;

pub use backend::{CryptoBackend, Ed25519Backend, SigningError};
pub use hash::{double_sha256, keccak256, sha256};
pub use keys::{GallacticKeypair, GallacticPublicKey, KeyError};
