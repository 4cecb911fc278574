//! Error taxonomy for building, signing and decoding transactions.

use thiserror::Error;

use crate::crypto::keys::KeyError;

/// Errors that can occur while working with a [`super::Transaction`].
///
/// Every fallible operation in this module returns one of these. Nothing is
/// retried and nothing is swallowed; the caller decides what to do.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The bytes (or the string carrying them) are not a well-formed
    /// canonical encoding of the expected shape.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The type discriminant does not name a known payload kind.
    #[error("unknown transaction type: {0:#04x}")]
    UnknownTransactionType(u8),

    /// The chain id byte names neither mainnet nor testnet.
    #[error("unknown chain id: {0}")]
    UnknownChainId(u8),

    /// The signature-type discriminant is neither single nor multi.
    #[error("undefined signature type: {0}")]
    UndefinedSignatureType(u8),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// A signature was requested but none is attached.
    #[error("signature not set")]
    SignatureNotSet,

    /// Cosigner signatures can only be appended once the multisig address
    /// has been bound.
    #[error("multisig address not set")]
    MultisigNotInitialized,

    #[error("number of signatures must be greater than 0")]
    NoSignaturesProvided,

    /// A multisig-only operation was attempted on a single-signature
    /// transaction.
    #[error("transaction does not use the multisig scheme")]
    NotMultisig,

    #[error(transparent)]
    Key(#[from] KeyError),
}

impl From<alloy_rlp::Error> for TransactionError {
    fn from(err: alloy_rlp::Error) -> Self {
        Self::MalformedEncoding(err.to_string())
    }
}

impl From<hex::FromHexError> for TransactionError {
    fn from(err: hex::FromHexError) -> Self {
        Self::MalformedEncoding(format!("invalid hex: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rlp_errors_become_malformed_encoding() {
        let err: TransactionError = alloy_rlp::Error::InputTooShort.into();
        assert!(matches!(err, TransactionError::MalformedEncoding(_)));
    }

    #[test]
    fn unknown_type_renders_as_hex_byte() {
        assert_eq!(
            TransactionError::UnknownTransactionType(0x2a).to_string(),
            "unknown transaction type: 0x2a"
        );
    }

    #[test]
    fn unknown_chain_is_its_own_variant() {
        assert_eq!(TransactionError::UnknownChainId(3).to_string(), "unknown chain id: 3");
    }
}
