//! # Signer Abstraction
//!
//! The transaction layer never touches key bytes directly. It talks to a
//! [`Signer`]: something that knows its own address and can sign a 32-byte
//! digest. [`PrivateKey`] is the in-process implementation; a hardware wallet
//! or remote signer plugs in the same way.

use alloy_primitives::B256;

use super::keys::{KeyError, PrivateKey, RecoverableSignature};
use crate::transaction::types::Address;

/// A secp256k1 signer.
pub trait Signer {
    /// The account address controlled by this signer.
    fn address(&self) -> Address;

    /// Produce a recoverable signature over `digest`. The digest is signed
    /// as-is, not hashed again.
    fn sign_digest(&self, digest: &B256) -> Result<RecoverableSignature, KeyError>;
}

impl Signer for PrivateKey {
    fn address(&self) -> Address {
        PrivateKey::address(self)
    }

    fn sign_digest(&self, digest: &B256) -> Result<RecoverableSignature, KeyError> {
        PrivateKey::sign_digest(self, digest)
    }
}

impl<S: Signer + ?Sized> Signer for &S {
    fn address(&self) -> Address {
        (**self).address()
    }

    fn sign_digest(&self, digest: &B256) -> Result<RecoverableSignature, KeyError> {
        (**self).sign_digest(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::recover_address;
    use crate::crypto::keccak256;

    /// Signs through the trait object, as a remote signer would be used.
    fn sign_dyn(signer: &dyn Signer, digest: &B256) -> RecoverableSignature {
        signer.sign_digest(digest).unwrap()
    }

    #[test]
    fn private_key_signs_through_trait() {
        let key = PrivateKey::generate();
        let digest = keccak256(b"through the trait");
        let sig = sign_dyn(&key, &digest);
        assert_eq!(recover_address(&digest, &sig).unwrap(), Signer::address(&key));
    }

    #[test]
    fn references_are_signers() {
        let key = PrivateKey::from_bytes(&[3u8; 32]).unwrap();
        let by_ref: &PrivateKey = &key;
        assert_eq!(Signer::address(&by_ref), key.address());
    }
}
