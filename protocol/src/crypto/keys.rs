//! # Key Management
//!
//! secp256k1 private keys and the address derivation that goes with them.
//!
//! An account address is the trailing 20 bytes of
//! `keccak256(uncompressed_public_key[1..])`, the same derivation Ethereum
//! uses, rendered with an `Mx` prefix instead of `0x`.
//!
//! ## Security considerations
//!
//! - Key bytes are never logged and never show up in `Debug` output.
//! - Random keys come from `OsRng`.
//! - Mnemonics and HD derivation are someone else's job; this module starts
//!   from 32 raw bytes.

use alloy_primitives::B256;
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use super::hash::keccak256;
use crate::config::{PRIVATE_KEY_LENGTH, RECOVERABLE_SIGNATURE_LENGTH};
use crate::transaction::types::Address;

/// `r (32) || s (32) || recovery id (1)`.
pub type RecoverableSignature = [u8; RECOVERABLE_SIGNATURE_LENGTH];

/// Errors that can occur during key operations.
///
/// Deliberately vague about key material; the messages never echo input.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid private key: expected 32 bytes encoding a valid secp256k1 scalar")]
    InvalidPrivateKey,

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("invalid recoverable signature")]
    InvalidSignature,

    #[error("public key recovery failed")]
    RecoveryFailed,
}

/// A secp256k1 signing key.
///
/// Signing is deterministic (RFC 6979), so the same key and digest always
/// yield the same signature. The recorded regression vectors rely on that.
#[derive(Clone)]
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    /// Generate a fresh key using the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut OsRng),
        }
    }

    /// Reconstruct a key from raw 32-byte secret material.
    pub fn from_bytes(bytes: &[u8; PRIVATE_KEY_LENGTH]) -> Result<Self, KeyError> {
        let signing_key =
            SigningKey::from_slice(bytes).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Reconstruct a key from its hex encoding. A leading `0x` is tolerated.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let trimmed = hex_str.trim();
        let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(trimmed).map_err(|_| KeyError::InvalidPrivateKey)?;
        let arr: [u8; PRIVATE_KEY_LENGTH] =
            bytes.try_into().map_err(|_| KeyError::InvalidPrivateKey)?;
        Self::from_bytes(&arr)
    }

    /// Export the secret as lowercase hex. Handle with care.
    pub fn to_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }

    /// The account address controlled by this key.
    pub fn address(&self) -> Address {
        address_from_verifying_key(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte digest, returning the 65-byte recoverable form.
    ///
    /// The digest is signed as-is (no extra hashing). `s` is always
    /// normalized to the lower half of the curve order.
    pub fn sign_digest(&self, digest: &B256) -> Result<RecoverableSignature, KeyError> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest.as_slice())
            .map_err(|e| KeyError::SigningFailed(e.to_string()))?;

        let mut out = [0u8; RECOVERABLE_SIGNATURE_LENGTH];
        out[..64].copy_from_slice(&signature.to_bytes());
        out[64] = recovery_id.to_byte();
        Ok(out)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(address={})", self.address())
    }
}

/// Derive the account address of a public key.
pub fn address_from_verifying_key(key: &VerifyingKey) -> Address {
    let point = PublicKey::from(key).to_encoded_point(false);
    // Skip the 0x04 uncompressed tag.
    let digest = keccak256(&point.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    Address::new(address)
}

/// Recover the address that produced `signature` over `digest`.
pub fn recover_address(
    digest: &B256,
    signature: &RecoverableSignature,
) -> Result<Address, KeyError> {
    let sig = EcdsaSignature::from_slice(&signature[..64]).map_err(|_| KeyError::InvalidSignature)?;
    let recovery_id = RecoveryId::from_byte(signature[64]).ok_or(KeyError::InvalidSignature)?;
    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id)
        .map_err(|_| KeyError::RecoveryFailed)?;
    Ok(address_from_verifying_key(&key))
}
