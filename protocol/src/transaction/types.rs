//! Core value types for transactions.
//!
//! Fixed-width byte arrays (coin symbols, addresses, candidate keys) and the
//! small discriminant enums that go on the wire as a single byte. All of them
//! are `Copy` so they can be passed around without thinking about it.

use alloy_primitives::U256;
use alloy_rlp::{BufMut, Decodable, Encodable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::TransactionError;
use crate::config::{
    ADDRESS_LENGTH, ADDRESS_PREFIX, CHAIN_ID_MAINNET, CHAIN_ID_TESTNET, COIN_SYMBOL_LENGTH,
    PUBLIC_KEY_LENGTH, PUBLIC_KEY_PREFIX,
};

/// Amounts are unsigned integers in the smallest denomination (pip).
pub type Amount = U256;

// ---------------------------------------------------------------------------
// Fixed-width byte newtypes
// ---------------------------------------------------------------------------

/// Implements canonical encoding and string serde for a `[u8; N]` newtype.
///
/// The array encodes as a byte string of exactly `N` bytes. Serde goes
/// through `Display`/`FromStr` so JSON output carries the human form.
macro_rules! fixed_bytes {
    ($name:ident, $len:expr) => {
        impl $name {
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl Encodable for $name {
            fn encode(&self, out: &mut dyn BufMut) {
                self.0.encode(out)
            }

            fn length(&self) -> usize {
                self.0.length()
            }
        }

        impl Decodable for $name {
            fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
                <[u8; $len]>::decode(buf).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A coin ticker in its fixed 10-byte wire slot.
///
/// Longer symbols are silently truncated to 10 bytes; shorter ones are
/// zero padded on the right.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoinSymbol([u8; COIN_SYMBOL_LENGTH]);

fixed_bytes!(CoinSymbol, COIN_SYMBOL_LENGTH);

impl From<&str> for CoinSymbol {
    fn from(symbol: &str) -> Self {
        let mut bytes = [0u8; COIN_SYMBOL_LENGTH];
        let len = symbol.len().min(COIN_SYMBOL_LENGTH);
        bytes[..len].copy_from_slice(&symbol.as_bytes()[..len]);
        Self(bytes)
    }
}

impl FromStr for CoinSymbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for CoinSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self
            .0
            .iter()
            .rposition(|b| *b != 0)
            .map_or(0, |i| i + 1);
        f.write_str(&String::from_utf8_lossy(&self.0[..end]))
    }
}

impl fmt::Debug for CoinSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CoinSymbol({})", self)
    }
}

/// A 20-byte account address, written as `Mx` followed by 40 hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; ADDRESS_LENGTH]);

fixed_bytes!(Address, ADDRESS_LENGTH);

impl FromStr for Address {
    type Err = TransactionError;

    /// Parses `Mx<40 hex>`. No checksum is involved.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s
            .strip_prefix(ADDRESS_PREFIX)
            .ok_or_else(|| TransactionError::InvalidAddress(format!("missing {} prefix: {}", ADDRESS_PREFIX, s)))?;
        let bytes = hex::decode(hex_part)
            .map_err(|e| TransactionError::InvalidAddress(format!("{}: {}", s, e)))?;
        let arr: [u8; ADDRESS_LENGTH] = bytes.try_into().map_err(|b: Vec<u8>| {
            TransactionError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ADDRESS_LENGTH,
                b.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ADDRESS_PREFIX, hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

/// A validator candidate's 32-byte public key, written as `Mp` + 64 hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

fixed_bytes!(PublicKey, PUBLIC_KEY_LENGTH);

impl FromStr for PublicKey {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s.strip_prefix(PUBLIC_KEY_PREFIX).ok_or_else(|| {
            TransactionError::InvalidPublicKey(format!("missing {} prefix: {}", PUBLIC_KEY_PREFIX, s))
        })?;
        let bytes = hex::decode(hex_part)
            .map_err(|e| TransactionError::InvalidPublicKey(format!("{}: {}", s, e)))?;
        let arr: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|b: Vec<u8>| {
            TransactionError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                b.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PUBLIC_KEY_PREFIX, hex::encode(self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

// ---------------------------------------------------------------------------
// Discriminants
// ---------------------------------------------------------------------------

/// The network a transaction is bound to. Replaying across networks fails
/// because the chain id is part of the signing hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ChainId {
    Mainnet = CHAIN_ID_MAINNET,
    Testnet = CHAIN_ID_TESTNET,
}

impl TryFrom<u8> for ChainId {
    type Error = TransactionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            CHAIN_ID_MAINNET => Ok(Self::Mainnet),
            CHAIN_ID_TESTNET => Ok(Self::Testnet),
            other => Err(TransactionError::UnknownChainId(other)),
        }
    }
}

impl FromStr for ChainId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            other => Err(format!("unknown chain: {}", other)),
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::config::chain_name(*self as u8))
    }
}

/// Which payload kind a transaction carries.
///
/// The discriminant values are fixed by the chain. Gaps belong to kinds
/// this crate does not build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TransactionType {
    Send = 0x01,
    SellCoin = 0x02,
    SellAllCoin = 0x03,
    BuyCoin = 0x04,
    Delegate = 0x07,
    Unbond = 0x08,
    SetCandidateOnline = 0x0A,
    SetCandidateOffline = 0x0B,
    CreateMultisig = 0x0C,
    Multisend = 0x0D,
}

impl TryFrom<u8> for TransactionType {
    type Error = TransactionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0x01 => Self::Send,
            0x02 => Self::SellCoin,
            0x03 => Self::SellAllCoin,
            0x04 => Self::BuyCoin,
            0x07 => Self::Delegate,
            0x08 => Self::Unbond,
            0x0A => Self::SetCandidateOnline,
            0x0B => Self::SetCandidateOffline,
            0x0C => Self::CreateMultisig,
            0x0D => Self::Multisend,
            other => return Err(TransactionError::UnknownTransactionType(other)),
        })
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Send => "Send",
            Self::SellCoin => "SellCoin",
            Self::SellAllCoin => "SellAllCoin",
            Self::BuyCoin => "BuyCoin",
            Self::Delegate => "Delegate",
            Self::Unbond => "Unbond",
            Self::SetCandidateOnline => "SetCandidateOnline",
            Self::SetCandidateOffline => "SetCandidateOffline",
            Self::CreateMultisig => "CreateMultisig",
            Self::Multisend => "Multisend",
        };
        f.write_str(name)
    }
}

/// Single signer, or a multisig account plus an ordered list of cosigners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SignatureType {
    Single = 1,
    Multi = 2,
}

impl TryFrom<u8> for SignatureType {
    type Error = TransactionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Multi),
            other => Err(TransactionError::UndefinedSignatureType(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn coin_symbol_pads_and_trims() {
        let coin = CoinSymbol::from("MNT");
        assert_eq!(coin.as_bytes(), b"MNT\0\0\0\0\0\0\0");
        assert_eq!(coin.to_string(), "MNT");
    }

    #[test]
    fn coin_symbol_truncates_long_tickers() {
        let coin = CoinSymbol::from("ABCDEFGHIJKLMN");
        assert_eq!(coin.to_string(), "ABCDEFGHIJ");
    }

    #[test]
    fn coin_symbol_encodes_full_width() {
        let encoded = codec::encode(&CoinSymbol::from("MNT"));
        assert_eq!(hex::encode(encoded), "8a4d4e5400000000000000");
    }

    #[test]
    fn address_parse_and_display() {
        let s = "Mx1b685a7c1e78726c48f619c497a07ed75fe00483";
        let address: Address = s.parse().unwrap();
        assert_eq!(address.to_string(), s);
        assert_eq!(address.as_bytes()[0], 0x1b);
    }

    #[test]
    fn address_rejects_bad_input() {
        for bad in [
            "1b685a7c1e78726c48f619c497a07ed75fe00483",
            "Mx1b685a7c",
            "Mx1b685a7c1e78726c48f619c497a07ed75fe0048300",
            "Mxzz685a7c1e78726c48f619c497a07ed75fe00483",
        ] {
            assert!(
                matches!(bad.parse::<Address>(), Err(TransactionError::InvalidAddress(_))),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn public_key_parse_and_display() {
        let s = format!("Mp{}", "ab".repeat(32));
        let key: PublicKey = s.parse().unwrap();
        assert_eq!(key.to_string(), s);
        assert!(matches!(
            "Mpabcd".parse::<PublicKey>(),
            Err(TransactionError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn address_serializes_as_string() {
        let address: Address = "Mx1b685a7c1e78726c48f619c497a07ed75fe00483".parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"Mx1b685a7c1e78726c48f619c497a07ed75fe00483\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn transaction_type_rejects_unknown_discriminant() {
        assert_eq!(TransactionType::try_from(0x0D).unwrap(), TransactionType::Multisend);
        assert_eq!(TransactionType::try_from(0x0C).unwrap(), TransactionType::CreateMultisig);
        assert!(matches!(
            TransactionType::try_from(0x05),
            Err(TransactionError::UnknownTransactionType(0x05))
        ));
    }

    #[test]
    fn signature_type_rejects_unknown_discriminant() {
        assert!(matches!(
            SignatureType::try_from(0),
            Err(TransactionError::UndefinedSignatureType(0))
        ));
        assert_eq!(SignatureType::Multi as u8, 2);
    }

    #[test]
    fn chain_id_from_str() {
        assert_eq!("testnet".parse::<ChainId>().unwrap(), ChainId::Testnet);
        assert_eq!("MAINNET".parse::<ChainId>().unwrap(), ChainId::Mainnet);
        assert!("devnet".parse::<ChainId>().is_err());
        assert_eq!(ChainId::Testnet as u8, 2);
    }

    #[test]
    fn chain_id_rejects_unknown_byte() {
        assert_eq!(ChainId::try_from(1).unwrap(), ChainId::Mainnet);
        assert!(matches!(ChainId::try_from(3), Err(TransactionError::UnknownChainId(3))));
        assert!(matches!(ChainId::try_from(0), Err(TransactionError::UnknownChainId(0))));
    }
}
