//! Payload variants, one per transaction kind.
//!
//! Each variant is a plain struct with consuming setters. Wrapped into a
//! [`TxData`], it becomes the `data` field of a transaction: the variant is
//! canonically encoded and the transaction's type discriminant is taken from
//! which variant it is.
//!
//! ```
//! use mintx_protocol::transaction::SendData;
//!
//! let data = SendData::new()
//!     .coin("MNT")
//!     .value(1_000_000_000_000_000_000u128)
//!     .to("Mx1b685a7c1e78726c48f619c497a07ed75fe00483")
//!     .unwrap();
//! assert_eq!(data.coin.to_string(), "MNT");
//! ```

use alloy_primitives::ruint::UintTryFrom;
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

use super::error::TransactionError;
use super::types::{Address, Amount, CoinSymbol, PublicKey, TransactionType};
use crate::codec;
use crate::config::{
    FEE_UNITS_CANDIDATE_SWITCH, FEE_UNITS_CONVERT, FEE_UNITS_CREATE_MULTISIG,
    FEE_UNITS_MULTISEND_EXTRA, FEE_UNITS_SEND, FEE_UNITS_STAKE,
};

// ---------------------------------------------------------------------------
// Send
// ---------------------------------------------------------------------------

/// Transfer `value` of `coin` to `to`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct SendData {
    pub coin: CoinSymbol,
    pub to: Address,
    pub value: Amount,
}

impl SendData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coin(mut self, symbol: &str) -> Self {
        self.coin = CoinSymbol::from(symbol);
        self
    }

    /// Amount setters accept any integer that widens into [`Amount`]:
    /// `u64`, `u128`, or an `Amount` itself.
    ///
    /// # Panics
    ///
    /// Panics on a negative signed integer.
    pub fn value<T>(mut self, value: T) -> Self
    where
        Amount: UintTryFrom<T>,
    {
        self.value = Amount::from(value);
        self
    }

    /// Set the recipient from its `Mx...` form.
    pub fn to(mut self, address: &str) -> Result<Self, TransactionError> {
        self.to = address.parse()?;
        Ok(self)
    }

    pub fn to_address(mut self, address: Address) -> Self {
        self.to = address;
        self
    }

    /// Like [`SendData::to`], for scripts and tests with literal addresses.
    ///
    /// # Panics
    ///
    /// Panics if `address` is not a valid `Mx...` address.
    pub fn must_to(self, address: &str) -> Self {
        match self.to(address) {
            Ok(data) => data,
            Err(e) => panic!("must_to({:?}): {}", address, e),
        }
    }
}

// ---------------------------------------------------------------------------
// Coin conversion
// ---------------------------------------------------------------------------

/// Sell exactly `value_to_sell`, receiving at least `minimum_value_to_buy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct SellCoinData {
    pub coin_to_sell: CoinSymbol,
    pub value_to_sell: Amount,
    pub coin_to_buy: CoinSymbol,
    pub minimum_value_to_buy: Amount,
}

impl SellCoinData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coin_to_sell(mut self, symbol: &str) -> Self {
        self.coin_to_sell = CoinSymbol::from(symbol);
        self
    }

    pub fn value_to_sell<T>(mut self, value: T) -> Self
    where
        Amount: UintTryFrom<T>,
    {
        self.value_to_sell = Amount::from(value);
        self
    }

    pub fn coin_to_buy(mut self, symbol: &str) -> Self {
        self.coin_to_buy = CoinSymbol::from(symbol);
        self
    }

    pub fn minimum_value_to_buy<T>(mut self, value: T) -> Self
    where
        Amount: UintTryFrom<T>,
    {
        self.minimum_value_to_buy = Amount::from(value);
        self
    }
}

/// Sell the sender's entire balance of `coin_to_sell`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct SellAllCoinData {
    pub coin_to_sell: CoinSymbol,
    pub coin_to_buy: CoinSymbol,
    pub minimum_value_to_buy: Amount,
}

impl SellAllCoinData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coin_to_sell(mut self, symbol: &str) -> Self {
        self.coin_to_sell = CoinSymbol::from(symbol);
        self
    }

    pub fn coin_to_buy(mut self, symbol: &str) -> Self {
        self.coin_to_buy = CoinSymbol::from(symbol);
        self
    }

    pub fn minimum_value_to_buy<T>(mut self, value: T) -> Self
    where
        Amount: UintTryFrom<T>,
    {
        self.minimum_value_to_buy = Amount::from(value);
        self
    }
}

/// Buy exactly `value_to_buy`, spending at most `maximum_value_to_sell`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct BuyCoinData {
    pub coin_to_buy: CoinSymbol,
    pub value_to_buy: Amount,
    pub coin_to_sell: CoinSymbol,
    pub maximum_value_to_sell: Amount,
}

impl BuyCoinData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coin_to_buy(mut self, symbol: &str) -> Self {
        self.coin_to_buy = CoinSymbol::from(symbol);
        self
    }

    pub fn value_to_buy<T>(mut self, value: T) -> Self
    where
        Amount: UintTryFrom<T>,
    {
        self.value_to_buy = Amount::from(value);
        self
    }

    pub fn coin_to_sell(mut self, symbol: &str) -> Self {
        self.coin_to_sell = CoinSymbol::from(symbol);
        self
    }

    pub fn maximum_value_to_sell<T>(mut self, value: T) -> Self
    where
        Amount: UintTryFrom<T>,
    {
        self.maximum_value_to_sell = Amount::from(value);
        self
    }
}

// ---------------------------------------------------------------------------
// Staking
// ---------------------------------------------------------------------------

/// Stake `value` of `coin` with the candidate `pub_key`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct DelegateData {
    pub pub_key: PublicKey,
    pub coin: CoinSymbol,
    pub value: Amount,
}

/// Withdraw `value` of `coin` previously staked with `pub_key`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct UnbondData {
    pub pub_key: PublicKey,
    pub coin: CoinSymbol,
    pub value: Amount,
}

macro_rules! stake_setters {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Set the candidate from its `Mp...` form.
            pub fn pub_key(mut self, key: &str) -> Result<Self, TransactionError> {
                self.pub_key = key.parse()?;
                Ok(self)
            }

            pub fn public_key(mut self, key: PublicKey) -> Self {
                self.pub_key = key;
                self
            }

            pub fn coin(mut self, symbol: &str) -> Self {
                self.coin = CoinSymbol::from(symbol);
                self
            }

            pub fn value<T>(mut self, value: T) -> Self
            where
                Amount: UintTryFrom<T>,
            {
                self.value = Amount::from(value);
                self
            }
        }
    };
}

stake_setters!(DelegateData);
stake_setters!(UnbondData);

/// Turn a candidate online.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct SetCandidateOnData {
    pub pub_key: PublicKey,
}

/// Turn a candidate offline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct SetCandidateOffData {
    pub pub_key: PublicKey,
}

macro_rules! candidate_setters {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn pub_key(mut self, key: &str) -> Result<Self, TransactionError> {
                self.pub_key = key.parse()?;
                Ok(self)
            }

            pub fn public_key(mut self, key: PublicKey) -> Self {
                self.pub_key = key;
                self
            }
        }
    };
}

candidate_setters!(SetCandidateOnData);
candidate_setters!(SetCandidateOffData);

// ---------------------------------------------------------------------------
// Multisend
// ---------------------------------------------------------------------------

/// Several transfers in one transaction, executed in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct MultisendData {
    pub list: Vec<SendData>,
}

impl MultisendData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(mut self, item: SendData) -> Self {
        self.list.push(item);
        self
    }
}

// ---------------------------------------------------------------------------
// Multisig account
// ---------------------------------------------------------------------------

/// Register a multisig account. A transaction from it is valid once the
/// summed weight of its cosigners reaches `threshold`.
///
/// `weights[i]` belongs to `addresses[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable)]
pub struct CreateMultisigData {
    pub threshold: u64,
    pub weights: Vec<u64>,
    pub addresses: Vec<Address>,
}

impl CreateMultisigData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Add a cosigner from its `Mx...` form.
    pub fn add_signer(self, address: &str, weight: u64) -> Result<Self, TransactionError> {
        Ok(self.add_signer_address(address.parse()?, weight))
    }

    pub fn add_signer_address(mut self, address: Address, weight: u64) -> Self {
        self.addresses.push(address);
        self.weights.push(weight);
        self
    }
}

// ---------------------------------------------------------------------------
// TxData
// ---------------------------------------------------------------------------

/// Every payload kind a transaction can carry.
///
/// Closed on purpose: adding a kind means touching the discriminant, the fee
/// table and the decoder, and the compiler points at all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TxData {
    Send(SendData),
    SellCoin(SellCoinData),
    SellAllCoin(SellAllCoinData),
    BuyCoin(BuyCoinData),
    Delegate(DelegateData),
    Unbond(UnbondData),
    SetCandidateOn(SetCandidateOnData),
    SetCandidateOff(SetCandidateOffData),
    CreateMultisig(CreateMultisigData),
    Multisend(MultisendData),
}

impl TxData {
    /// The type discriminant this payload travels under.
    pub fn tx_type(&self) -> TransactionType {
        match self {
            Self::Send(_) => TransactionType::Send,
            Self::SellCoin(_) => TransactionType::SellCoin,
            Self::SellAllCoin(_) => TransactionType::SellAllCoin,
            Self::BuyCoin(_) => TransactionType::BuyCoin,
            Self::Delegate(_) => TransactionType::Delegate,
            Self::Unbond(_) => TransactionType::Unbond,
            Self::SetCandidateOn(_) => TransactionType::SetCandidateOnline,
            Self::SetCandidateOff(_) => TransactionType::SetCandidateOffline,
            Self::CreateMultisig(_) => TransactionType::CreateMultisig,
            Self::Multisend(_) => TransactionType::Multisend,
        }
    }

    /// Base fee in units, before the per-byte surcharge on memo and
    /// service data.
    pub fn fee_units(&self) -> u64 {
        match self {
            Self::Send(_) => FEE_UNITS_SEND,
            Self::SellCoin(_) | Self::SellAllCoin(_) | Self::BuyCoin(_) => FEE_UNITS_CONVERT,
            Self::Delegate(_) | Self::Unbond(_) => FEE_UNITS_STAKE,
            Self::SetCandidateOn(_) | Self::SetCandidateOff(_) => FEE_UNITS_CANDIDATE_SWITCH,
            Self::CreateMultisig(_) => FEE_UNITS_CREATE_MULTISIG,
            Self::Multisend(data) => {
                let extra = (data.list.len() as u64).saturating_sub(1);
                FEE_UNITS_SEND + FEE_UNITS_MULTISEND_EXTRA * extra
            }
        }
    }

    /// Canonical encoding of the wrapped variant.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Send(d) => codec::encode(d),
            Self::SellCoin(d) => codec::encode(d),
            Self::SellAllCoin(d) => codec::encode(d),
            Self::BuyCoin(d) => codec::encode(d),
            Self::Delegate(d) => codec::encode(d),
            Self::Unbond(d) => codec::encode(d),
            Self::SetCandidateOn(d) => codec::encode(d),
            Self::SetCandidateOff(d) => codec::encode(d),
            Self::CreateMultisig(d) => codec::encode(d),
            Self::Multisend(d) => codec::encode(d),
        }
    }

    /// Decode `bytes` as the variant named by `tx_type`.
    pub fn decode(tx_type: TransactionType, bytes: &[u8]) -> Result<Self, TransactionError> {
        Ok(match tx_type {
            TransactionType::Send => Self::Send(codec::decode(bytes)?),
            TransactionType::SellCoin => Self::SellCoin(codec::decode(bytes)?),
            TransactionType::SellAllCoin => Self::SellAllCoin(codec::decode(bytes)?),
            TransactionType::BuyCoin => Self::BuyCoin(codec::decode(bytes)?),
            TransactionType::Delegate => Self::Delegate(codec::decode(bytes)?),
            TransactionType::Unbond => Self::Unbond(codec::decode(bytes)?),
            TransactionType::SetCandidateOnline => Self::SetCandidateOn(codec::decode(bytes)?),
            TransactionType::SetCandidateOffline => Self::SetCandidateOff(codec::decode(bytes)?),
            TransactionType::CreateMultisig => Self::CreateMultisig(codec::decode(bytes)?),
            TransactionType::Multisend => Self::Multisend(codec::decode(bytes)?),
        })
    }
}

macro_rules! into_tx_data {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for TxData {
                fn from(data: $ty) -> Self {
                    Self::$variant(data)
                }
            }
        )*
    };
}

into_tx_data!(
    Send(SendData),
    SellCoin(SellCoinData),
    SellAllCoin(SellAllCoinData),
    BuyCoin(BuyCoinData),
    Delegate(DelegateData),
    Unbond(UnbondData),
    SetCandidateOn(SetCandidateOnData),
    SetCandidateOff(SetCandidateOffData),
    CreateMultisig(CreateMultisigData),
    Multisend(MultisendData),
);
