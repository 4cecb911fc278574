//! # Hashing Utilities
//!
//! The chain uses two hash functions and they are not interchangeable:
//!
//! - **Keccak-256**: the pre-Sha3 Keccak variant (Ethereum flavour). Used for
//!   the signing digest of a transaction and for deriving account addresses
//!   from public keys.
//!
//! - **SHA-256**: used only for the transaction identifier (`Mt...`), which
//!   is computed over the *fully* encoded transaction, signature included.
//!
//! Mixing them up produces hashes that look perfectly plausible and are
//! perfectly wrong, so each call site names the one it wants explicitly.

use alloy_primitives::B256;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use mintx_protocol::crypto::sha256;
///
/// let hash = sha256(b"minter");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the legacy Keccak-256 hash of the input data.
///
/// Note this is *not* NIST SHA3-256; the padding differs.
pub fn keccak256(data: &[u8]) -> B256 {
    alloy_primitives::keccak256(data)
}
