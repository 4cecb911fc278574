//! # Cryptographic Primitives
//!
//! Everything the transaction layer needs from cryptography, and nothing
//! more:
//!
//! - **secp256k1** recoverable ECDSA for signatures (RFC 6979, low-S).
//! - **Keccak-256** for signing digests and address derivation.
//! - **SHA-256** for transaction identifiers.
//!
//! No custom cryptography. All primitives come from audited crates.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{keccak256, sha256};
pub use keys::{recover_address, KeyError, PrivateKey, RecoverableSignature};
pub use signatures::Signer;
