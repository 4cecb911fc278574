//! Signature containers attached to a transaction.
//!
//! A single signature is `[v, r, s]` with `v = recovery_id + 27`. A multisig
//! signature is `[multisig_address, [sig, sig, ...]]`, where the list keeps
//! the order signatures were added in. Nothing here checks that the cosigners
//! actually control the multisig account; that is the chain's job.

use alloy_primitives::{B256, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};

use super::error::TransactionError;
use super::types::{Address, SignatureType};
use crate::codec;
use crate::config::SIGNATURE_V_OFFSET;
use crate::crypto::keys::{recover_address, KeyError, RecoverableSignature};

/// One recoverable ECDSA signature.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Signature {
    pub v: U256,
    pub r: U256,
    pub s: U256,
}

impl Signature {
    /// Split a 65-byte `r || s || recovery_id` signature into its wire form.
    pub fn from_recoverable(sig: &RecoverableSignature) -> Self {
        Self {
            r: U256::from_be_slice(&sig[..32]),
            s: U256::from_be_slice(&sig[32..64]),
            v: U256::from(sig[64]) + U256::from(SIGNATURE_V_OFFSET),
        }
    }

    /// Reassemble the 65-byte recoverable form.
    pub fn to_recoverable(&self) -> Result<RecoverableSignature, KeyError> {
        let recovery_id = self
            .v
            .checked_sub(U256::from(SIGNATURE_V_OFFSET))
            .filter(|id| *id <= U256::from(3u8))
            .ok_or(KeyError::InvalidSignature)?;

        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r.to_be_bytes::<32>());
        out[32..64].copy_from_slice(&self.s.to_be_bytes::<32>());
        out[64] = recovery_id.as_limbs()[0] as u8;
        Ok(out)
    }

    /// Address of whoever produced this signature over `digest`.
    pub fn recover(&self, digest: &B256) -> Result<Address, KeyError> {
        recover_address(digest, &self.to_recoverable()?)
    }

    pub fn encode(&self) -> Vec<u8> {
        codec::encode(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, TransactionError> {
        codec::decode(bytes)
    }
}

/// The multisig account plus the cosigner signatures collected so far.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct SignatureMulti {
    pub multisig: Address,
    pub signatures: Vec<Signature>,
}

impl SignatureMulti {
    pub fn new(multisig: Address) -> Self {
        Self {
            multisig,
            signatures: Vec::new(),
        }
    }
}

/// Parsed contents of a transaction's `signature_data` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureData {
    Single(Signature),
    Multi(SignatureMulti),
}

impl SignatureData {
    /// Parse raw signature bytes according to the signature scheme.
    pub fn decode(signature_type: SignatureType, bytes: &[u8]) -> Result<Self, TransactionError> {
        Ok(match signature_type {
            SignatureType::Single => Self::Single(codec::decode(bytes)?),
            SignatureType::Multi => Self::Multi(codec::decode(bytes)?),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Single(sig) => codec::encode(sig),
            Self::Multi(multi) => codec::encode(multi),
        }
    }

    /// The first signature, if any. For a multisig that's the first cosigner.
    pub fn first(&self) -> Option<&Signature> {
        match self {
            Self::Single(sig) => Some(sig),
            Self::Multi(multi) => multi.signatures.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{keccak256, PrivateKey};

    #[test]
    fn recoverable_roundtrip() {
        let key = PrivateKey::generate();
        let digest = keccak256(b"roundtrip");
        let raw = key.sign_digest(&digest).unwrap();

        let sig = Signature::from_recoverable(&raw);
        assert!(sig.v == U256::from(27u8) || sig.v == U256::from(28u8));
        assert_eq!(sig.to_recoverable().unwrap(), raw);
        assert_eq!(sig.recover(&digest).unwrap(), key.address());
    }

    #[test]
    fn v_below_offset_is_rejected() {
        let sig = Signature {
            v: U256::from(1u8),
            r: U256::from(1u8),
            s: U256::from(1u8),
        };
        assert!(matches!(sig.to_recoverable(), Err(KeyError::InvalidSignature)));
    }

    #[test]
    fn field_order_is_v_r_s() {
        let sig = Signature {
            v: U256::from(0x1cu8),
            r: U256::from(0x01u8),
            s: U256::from(0x02u8),
        };
        assert_eq!(sig.encode(), vec![0xc3, 0x1c, 0x01, 0x02]);
    }

    #[test]
    fn multi_keeps_insertion_order() {
        let a = Signature { v: U256::from(27u8), r: U256::from(1u8), s: U256::from(1u8) };
        let b = Signature { v: U256::from(28u8), r: U256::from(2u8), s: U256::from(2u8) };
        let mut multi = SignatureMulti::new(Address::new([0x11; 20]));
        multi.signatures.push(a.clone());
        multi.signatures.push(b.clone());

        let data = SignatureData::Multi(multi);
        let decoded = SignatureData::decode(SignatureType::Multi, &data.encode()).unwrap();
        assert_eq!(decoded, data);
        assert_eq!(decoded.first(), Some(&a));
    }

    #[test]
    fn empty_multi_has_no_first() {
        let data = SignatureData::Multi(SignatureMulti::new(Address::default()));
        assert!(data.first().is_none());
    }
}
