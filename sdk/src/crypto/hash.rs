//! # Hashing Utilities
//!
//! The node hashes the canonical signing message with Keccak-256 before
//! verifying a signature, so that is the digest the SDK signs. Double
//! SHA-256 provides the 4-byte checksum in base58-check encodings.
//!
//! Nothing else belongs here. If a second hash function shows up, it should
//! arrive through [`CryptoBackend`](super::CryptoBackend), not as another
//! free function that half the code forgets to call.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Compute the Keccak-256 hash of the input data.
///
/// This is the original Keccak padding (as used by Ethereum), not the
/// NIST SHA3-256 variant.
///
/// ```
/// use gallactic_sdk::crypto::keccak256;
///
/// assert_eq!(keccak256(b"gallactic").len(), 32);
/// ```
pub fn keccak256(data: &[u8]) -> Vec<u8> {
    Keccak256::digest(data).to_vec()
}

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use gallactic_sdk::crypto::sha256;
///
/// let hash = sha256(b"gallactic");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    sha256_array(data).to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
pub fn double_sha256(data: &[u8]) -> Vec<u8> {
    sha256(&sha256(data))
}

/// The 4-byte checksum appended by base58-check encodings.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let digest = double_sha256(data);
    let mut out = [0u8; 4];
    out.copy_from_slice(&digest[..4]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256 of the empty string.
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash, expected);
    }

    #[test]
    fn keccak256_known_vector() {
        // Keccak-256 of the empty string.
        let expected =
            hex::decode("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
                .unwrap();
        assert_eq!(keccak256(b""), expected);
    }

    #[test]
    fn keccak256_is_not_sha256() {
        assert_ne!(keccak256(b"gallactic"), sha256(b"gallactic"));
    }

    #[test]
    fn test_sha256_array_matches_vec() {
        let vec_result = sha256(b"test data");
        let arr_result = sha256_array(b"test data");
        assert_eq!(vec_result.as_slice(), arr_result.as_slice());
    }

    #[test]
    fn double_sha256_is_hash_of_hash() {
        let single = sha256(b"gallactic");
        let double = double_sha256(b"gallactic");
        assert_ne!(single, double);
        assert_eq!(double, sha256(&single));
    }

    #[test]
    fn checksum_is_prefix_of_double_hash() {
        let data = b"\x04payload";
        assert_eq!(checksum(data).as_slice(), &double_sha256(data)[..4]);
    }
}
