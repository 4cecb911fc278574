//! Transaction signing, single and multisig.
//!
//! Signing is a separate step from building because the key may not be
//! available at construction time (hardware wallet, remote signer, another
//! cosigner's machine). Everything here signs [`Transaction::signing_hash`],
//! the Keccak-256 of the first nine envelope fields, so the signature never
//! covers itself.
//!
//! ## Multisig flow
//!
//! 1. Switch the transaction to [`SignatureType::Multi`].
//! 2. Bind the multisig account: [`Transaction::sign`] with the account's
//!    key (or [`Transaction::sign_multisig`] with its address).
//! 3. Cosigners append their signatures, either in the same call or later
//!    through [`Transaction::add_signature`] with pre-computed bytes.
//!
//! Signatures are kept in the order they arrive. Duplicates are not
//! filtered and nothing checks the cosigners against the account.

use alloy_primitives::B256;
use bytes::Bytes;
use tracing::debug;

use super::builder::Transaction;
use super::error::TransactionError;
use super::signature::{Signature, SignatureData, SignatureMulti};
use super::types::{Address, SignatureType};
use crate::codec;
use crate::crypto::{keccak256, Signer};

impl Transaction {
    /// Keccak-256 of the canonical encoding of every field except
    /// `signature_data`.
    pub fn signing_hash(&self) -> B256 {
        keccak256(&codec::encode(&self.to_unsigned()))
    }

    /// Sign the transaction in place.
    ///
    /// Under the single scheme `key` signs and replaces any earlier
    /// signature; `cosigners` is ignored.
    ///
    /// Under the multisig scheme, if no multisig account is bound yet the
    /// address of `key` becomes the account. `key` itself does not sign.
    /// Each cosigner then signs and is appended in order. With no cosigners
    /// only the binding happens.
    pub fn sign<K: Signer + ?Sized>(
        &mut self,
        key: &K,
        cosigners: &[&dyn Signer],
    ) -> Result<(), TransactionError> {
        match self.signature_type {
            SignatureType::Single => {
                let signature = self.sign_with(key)?;
                self.set_signature(&SignatureData::Single(signature));
                debug!(signer = %key.address(), hash = %self.hash(), "signed transaction");
                Ok(())
            }
            SignatureType::Multi => {
                if self.signature_data.is_empty() {
                    self.bind_multisig(key.address());
                }
                self.append_cosigners(cosigners)
            }
        }
    }

    /// Bind an explicit multisig account and append cosigner signatures.
    ///
    /// An already bound account is left as it is.
    pub fn sign_multisig(
        &mut self,
        multisig: Address,
        cosigners: &[&dyn Signer],
    ) -> Result<(), TransactionError> {
        if self.signature_type != SignatureType::Multi {
            return Err(TransactionError::NotMultisig);
        }
        if self.signature_data.is_empty() {
            self.bind_multisig(multisig);
        }
        self.append_cosigners(cosigners)
    }

    /// Attach pre-computed, encoded [`Signature`]s.
    ///
    /// Under the single scheme the first one replaces the current signature
    /// and the rest are ignored. Under the multisig scheme all of them are
    /// appended, which requires the multisig account to be bound already.
    pub fn add_signature(&mut self, signatures: &[&[u8]]) -> Result<(), TransactionError> {
        let current = self.signature()?;
        let first = signatures.first().ok_or(TransactionError::NoSignaturesProvided)?;

        match (self.signature_type, current) {
            (SignatureType::Single, _) => {
                let signature = Signature::decode(first)?;
                self.set_signature(&SignatureData::Single(signature));
                Ok(())
            }
            (SignatureType::Multi, Some(SignatureData::Multi(mut multi))) => {
                for raw in signatures {
                    multi.signatures.push(Signature::decode(raw)?);
                }
                debug!(added = signatures.len(), total = multi.signatures.len(), "appended multisig signatures");
                self.set_signature(&SignatureData::Multi(multi));
                Ok(())
            }
            (SignatureType::Multi, _) => Err(TransactionError::MultisigNotInitialized),
        }
    }

    /// Encoding of the first signature: the only one under the single
    /// scheme, the first cosigner's under multisig.
    pub fn first_signature_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        let data = self.signature()?.ok_or(TransactionError::SignatureNotSet)?;
        data.first()
            .map(Signature::encode)
            .ok_or(TransactionError::SignatureNotSet)
    }

    /// Who sent this transaction.
    ///
    /// For a single signature the address is recovered from the signature
    /// and the signing hash. For a multisig it is the bound account.
    pub fn sender_address(&self) -> Result<Address, TransactionError> {
        match self.signature()? {
            None if self.signature_type == SignatureType::Multi => {
                Err(TransactionError::MultisigNotInitialized)
            }
            None => Err(TransactionError::SignatureNotSet),
            Some(SignatureData::Single(signature)) => {
                Ok(signature.recover(&self.signing_hash())?)
            }
            Some(SignatureData::Multi(multi)) => Ok(multi.multisig),
        }
    }

    fn sign_with<K: Signer + ?Sized>(&self, key: &K) -> Result<Signature, TransactionError> {
        let raw = key.sign_digest(&self.signing_hash())?;
        Ok(Signature::from_recoverable(&raw))
    }

    fn bind_multisig(&mut self, multisig: Address) {
        debug!(%multisig, "bound multisig account");
        self.set_signature(&SignatureData::Multi(SignatureMulti::new(multisig)));
    }

    fn append_cosigners(&mut self, cosigners: &[&dyn Signer]) -> Result<(), TransactionError> {
        if cosigners.is_empty() {
            return Ok(());
        }

        let mut multi = match self.signature()? {
            Some(SignatureData::Multi(multi)) => multi,
            _ => return Err(TransactionError::MultisigNotInitialized),
        };
        for cosigner in cosigners {
            multi.signatures.push(self.sign_with(*cosigner)?);
        }
        debug!(
            multisig = %multi.multisig,
            added = cosigners.len(),
            total = multi.signatures.len(),
            "appended multisig signatures"
        );
        self.set_signature(&SignatureData::Multi(multi));
        Ok(())
    }

    fn set_signature(&mut self, signature: &SignatureData) {
        self.signature_data = Bytes::from(signature.encode());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
