//! Transaction construction via the builder pattern.
//!
//! A [`TransactionBuilder`] is bound to one chain. Handing it a payload
//! variant produces an unsigned [`Transaction`] whose type discriminant is
//! fixed by the variant; the rest of the envelope is filled in with the
//! consuming `with_*` setters.
//!
//! The builder does not sign. That happens in [`super::signing`], which keeps
//! construction testable without key material.

use alloy_primitives::U256;
use alloy_rlp::{RlpDecodable, RlpEncodable};
use bytes::Bytes;
use tracing::trace;

use super::data::TxData;
use super::error::TransactionError;
use super::signature::SignatureData;
use super::types::{ChainId, CoinSymbol, SignatureType, TransactionType};
use crate::codec;
use crate::config::{FEE_UNITS_PER_EXTRA_BYTE, FEE_UNIT_PRICE, TX_HASH_PREFIX, TX_TRANSPORT_PREFIX};
use crate::crypto::sha256;

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

/// The ten-field tuple as it goes on the wire.
#[derive(Debug, Clone, RlpEncodable, RlpDecodable)]
pub(crate) struct RawTransaction {
    pub nonce: u64,
    pub chain_id: u8,
    pub gas_price: u8,
    pub gas_coin: CoinSymbol,
    pub tx_type: u8,
    pub data: Bytes,
    pub payload: Bytes,
    pub service_data: Bytes,
    pub signature_type: u8,
    pub signature_data: Bytes,
}

/// The first nine fields: everything the signature covers.
#[derive(Debug, Clone, RlpEncodable)]
pub(crate) struct UnsignedTransaction {
    pub nonce: u64,
    pub chain_id: u8,
    pub gas_price: u8,
    pub gas_coin: CoinSymbol,
    pub tx_type: u8,
    pub data: Bytes,
    pub payload: Bytes,
    pub service_data: Bytes,
    pub signature_type: u8,
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A transaction envelope together with its decoded payload.
///
/// The `data` field on the wire is the canonical encoding of [`TxData`]. Both
/// are kept: the typed value for callers, the bytes so that a decoded
/// transaction re-encodes to exactly what was read.
///
/// Changing any field after signing leaves a signature that no longer
/// matches. Re-sign after mutating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub(crate) nonce: u64,
    pub(crate) chain_id: ChainId,
    pub(crate) gas_price: u8,
    pub(crate) gas_coin: CoinSymbol,
    pub(crate) tx_type: TransactionType,
    pub(crate) data: TxData,
    pub(crate) encoded_data: Bytes,
    pub(crate) payload: Bytes,
    pub(crate) service_data: Bytes,
    pub(crate) signature_type: SignatureType,
    pub(crate) signature_data: Bytes,
}

impl Transaction {
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn gas_price(&self) -> u8 {
        self.gas_price
    }

    pub fn gas_coin(&self) -> CoinSymbol {
        self.gas_coin
    }

    pub fn tx_type(&self) -> TransactionType {
        self.tx_type
    }

    /// The typed payload.
    pub fn data(&self) -> &TxData {
        &self.data
    }

    /// The payload as it appears on the wire.
    pub fn encoded_data(&self) -> &[u8] {
        &self.encoded_data
    }

    /// The free-form memo.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn service_data(&self) -> &[u8] {
        &self.service_data
    }

    pub fn signature_type(&self) -> SignatureType {
        self.signature_type
    }

    /// Raw signature bytes; empty while unsigned.
    pub fn signature_data(&self) -> &[u8] {
        &self.signature_data
    }

    pub fn is_signed(&self) -> bool {
        !self.signature_data.is_empty()
    }

    /// Parsed signature data, or `None` while nothing is attached.
    pub fn signature(&self) -> Result<Option<SignatureData>, TransactionError> {
        if self.signature_data.is_empty() {
            return Ok(None);
        }
        SignatureData::decode(self.signature_type, &self.signature_data).map(Some)
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Symbols longer than ten bytes are truncated.
    pub fn with_gas_coin(mut self, symbol: &str) -> Self {
        self.gas_coin = CoinSymbol::from(symbol);
        self
    }

    pub fn with_gas_price(mut self, price: u8) -> Self {
        self.gas_price = price;
        self
    }

    /// Attach a memo. Every byte costs [`FEE_UNITS_PER_EXTRA_BYTE`] units.
    pub fn with_payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn with_service_data(mut self, service_data: impl Into<Bytes>) -> Self {
        self.service_data = service_data.into();
        self
    }

    /// Switch signature scheme.
    ///
    /// Unlike the other `with_*` setters this one can touch a second field.
    /// When `signature_type` differs from the current scheme, the attached
    /// signature bytes are cleared and the transaction is unsigned again.
    /// Setting the scheme it already has leaves the signature in place.
    pub fn with_signature_type(mut self, signature_type: SignatureType) -> Self {
        if self.signature_type != signature_type {
            self.signature_data = Bytes::new();
        }
        self.signature_type = signature_type;
        self
    }

    /// Shorthand for `with_signature_type(SignatureType::Multi)`.
    pub fn with_multi_signature_type(self) -> Self {
        self.with_signature_type(SignatureType::Multi)
    }

    /// Total fee in pip.
    ///
    /// `fee_units * 10^15 + 2 * (memo bytes + service data bytes) * 10^15`.
    pub fn fee(&self) -> U256 {
        let unit_price = U256::from(FEE_UNIT_PRICE);
        let extra_bytes = (self.payload.len() + self.service_data.len()) as u64;
        let base = U256::from(self.data.fee_units()) * unit_price;
        let surcharge = U256::from(extra_bytes) * U256::from(FEE_UNITS_PER_EXTRA_BYTE) * unit_price;
        base + surcharge
    }

    pub(crate) fn to_raw(&self) -> RawTransaction {
        RawTransaction {
            nonce: self.nonce,
            chain_id: self.chain_id as u8,
            gas_price: self.gas_price,
            gas_coin: self.gas_coin,
            tx_type: self.tx_type as u8,
            data: self.encoded_data.clone(),
            payload: self.payload.clone(),
            service_data: self.service_data.clone(),
            signature_type: self.signature_type as u8,
            signature_data: self.signature_data.clone(),
        }
    }

    pub(crate) fn to_unsigned(&self) -> UnsignedTransaction {
        UnsignedTransaction {
            nonce: self.nonce,
            chain_id: self.chain_id as u8,
            gas_price: self.gas_price,
            gas_coin: self.gas_coin,
            tx_type: self.tx_type as u8,
            data: self.encoded_data.clone(),
            payload: self.payload.clone(),
            service_data: self.service_data.clone(),
            signature_type: self.signature_type as u8,
        }
    }

    /// Canonical bytes of the full envelope, signature included.
    pub fn encode_bytes(&self) -> Vec<u8> {
        codec::encode(&self.to_raw())
    }

    /// Transport form: `0x` followed by the hex of [`Self::encode_bytes`].
    pub fn encode(&self) -> String {
        format!("{}{}", TX_TRANSPORT_PREFIX, hex::encode(self.encode_bytes()))
    }

    /// Content identifier: `Mt` + hex(sha256(full encoding)).
    ///
    /// Changes whenever the signature does. For the digest that gets signed,
    /// see [`Self::signing_hash`].
    pub fn hash(&self) -> String {
        format!("{}{}", TX_HASH_PREFIX, hex::encode(sha256(&self.encode_bytes())))
    }

    /// Parse a transport string back into a transaction.
    ///
    /// Fails with [`TransactionError::UnknownTransactionType`] for a type
    /// discriminant this crate has no payload for, and with
    /// [`TransactionError::MalformedEncoding`] for anything structurally off.
    pub fn decode(encoded: &str) -> Result<Self, TransactionError> {
        let hex_part = encoded.strip_prefix(TX_TRANSPORT_PREFIX).ok_or_else(|| {
            TransactionError::MalformedEncoding(format!("missing {} prefix", TX_TRANSPORT_PREFIX))
        })?;
        let bytes = hex::decode(hex_part)?;
        Self::decode_bytes(&bytes)
    }

    /// Parse canonical envelope bytes.
    pub fn decode_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let raw: RawTransaction = codec::decode(bytes)?;

        let tx_type = TransactionType::try_from(raw.tx_type)?;
        let signature_type = SignatureType::try_from(raw.signature_type)?;
        let chain_id = ChainId::try_from(raw.chain_id)?;
        let data = TxData::decode(tx_type, &raw.data)?;

        if !raw.signature_data.is_empty() {
            SignatureData::decode(signature_type, &raw.signature_data)?;
        }

        trace!(%tx_type, nonce = raw.nonce, "decoded transaction");

        Ok(Self {
            nonce: raw.nonce,
            chain_id,
            gas_price: raw.gas_price,
            gas_coin: raw.gas_coin,
            tx_type,
            data,
            encoded_data: raw.data,
            payload: raw.payload,
            service_data: raw.service_data,
            signature_type,
            signature_data: raw.signature_data,
        })
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Factory for unsigned [`Transaction`]s on one chain.
///
/// # Usage
///
/// ```rust
/// use mintx_protocol::transaction::{ChainId, SendData, TransactionBuilder};
///
/// let data = SendData::new()
///     .coin("MNT")
///     .value(1_000_000_000_000_000_000u128)
///     .must_to("Mx1b685a7c1e78726c48f619c497a07ed75fe00483");
///
/// let tx = TransactionBuilder::new(ChainId::Testnet)
///     .new_transaction(data)
///     .with_nonce(1)
///     .with_gas_price(1)
///     .with_gas_coin("MNT");
///
/// assert!(!tx.is_signed());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TransactionBuilder {
    chain_id: ChainId,
}

impl TransactionBuilder {
    pub fn new(chain_id: ChainId) -> Self {
        Self { chain_id }
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Wrap a payload into a fresh envelope.
    ///
    /// Nonce, gas price, memo and service data start empty, the gas coin is
    /// all zeros and the signature scheme is single.
    pub fn new_transaction(&self, data: impl Into<TxData>) -> Transaction {
        let data = data.into();
        let encoded_data = Bytes::from(data.encode());
        Transaction {
            nonce: 0,
            chain_id: self.chain_id,
            gas_price: 0,
            gas_coin: CoinSymbol::default(),
            tx_type: data.tx_type(),
            data,
            encoded_data,
            payload: Bytes::new(),
            service_data: Bytes::new(),
            signature_type: SignatureType::Single,
            signature_data: Bytes::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
