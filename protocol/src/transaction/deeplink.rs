//! Deep links: an unsigned payload packed into a URL that a wallet can open,
//! fill in and sign.
//!
//! Unlike a [`super::Transaction`], a deep link carries no chain id and no
//! signature, and nonce, gas price and gas coin are optional. The wallet
//! supplies whatever is left out.
//!
//! The passphrase query parameter is base64, not encryption. Anyone holding
//! the link can read it.

use alloy_rlp::RlpEncodable;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use bytes::Bytes;

use super::data::TxData;
use super::types::{CoinSymbol, TransactionType};
use crate::codec::{self, Optional};
use crate::config::{DEEP_LINK_HOST, DEEP_LINK_PASSPHRASE_KEY, DEEP_LINK_PATH, DEEP_LINK_SCHEME};

#[derive(RlpEncodable)]
struct RawDeepLink {
    tx_type: u8,
    data: Bytes,
    payload: Bytes,
    nonce: Optional<u64>,
    gas_price: Optional<u8>,
    gas_coin: Optional<CoinSymbol>,
}

/// A shareable, unsigned transaction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    tx_type: TransactionType,
    data: Bytes,
    payload: Bytes,
    nonce: Option<u64>,
    gas_price: Option<u8>,
    gas_coin: Option<CoinSymbol>,
}

impl DeepLink {
    /// Wrap a payload. The type discriminant follows the payload kind.
    pub fn new(data: impl Into<TxData>) -> Self {
        let data = data.into();
        Self {
            tx_type: data.tx_type(),
            data: Bytes::from(data.encode()),
            payload: Bytes::new(),
            nonce: None,
            gas_price: None,
            gas_coin: None,
        }
    }

    pub fn tx_type(&self) -> TransactionType {
        self.tx_type
    }

    pub fn with_payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn with_gas_price(mut self, price: u8) -> Self {
        self.gas_price = Some(price);
        self
    }

    pub fn with_gas_coin(mut self, symbol: &str) -> Self {
        self.gas_coin = Some(CoinSymbol::from(symbol));
        self
    }

    /// base64url (unpadded) of the canonical encoding.
    pub fn encode(&self) -> String {
        let raw = RawDeepLink {
            tx_type: self.tx_type as u8,
            data: self.data.clone(),
            payload: self.payload.clone(),
            nonce: Optional(self.nonce),
            gas_price: Optional(self.gas_price),
            gas_coin: Optional(self.gas_coin),
        };
        URL_SAFE_NO_PAD.encode(codec::encode(&raw))
    }

    /// Full URL. An empty passphrase is treated as none.
    pub fn create_link(&self, passphrase: Option<&str>) -> String {
        let mut link = format!(
            "{}://{}{}{}",
            DEEP_LINK_SCHEME,
            DEEP_LINK_HOST,
            DEEP_LINK_PATH,
            self.encode()
        );
        if let Some(pass) = passphrase.filter(|p| !p.is_empty()) {
            link.push('?');
            link.push_str(DEEP_LINK_PASSPHRASE_KEY);
            link.push('=');
            link.push_str(&STANDARD_NO_PAD.encode(pass));
        }
        link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::data::SendData;

    fn send() -> SendData {
        SendData::new()
            .coin("MNT")
            .value(1u64)
            .must_to("Mx1b685a7c1e78726c48f619c497a07ed75fe00483")
    }

    fn decode_raw(link: &DeepLink) -> Vec<u8> {
        URL_SAFE_NO_PAD.decode(link.encode()).unwrap()
    }

    #[test]
    fn absent_fields_encode_as_empty_strings() {
        let raw = decode_raw(&DeepLink::new(send()));
        // payload, nonce, gas price and gas coin: four empty strings.
        assert!(raw.ends_with(&[0x80, 0x80, 0x80, 0x80]));
        assert_eq!(raw[1], 0x01);
    }

    #[test]
    fn present_fields_are_encoded() {
        let link = DeepLink::new(send())
            .with_payload(&b"hi"[..])
            .with_nonce(5)
            .with_gas_price(1)
            .with_gas_coin("MNT");
        let raw = decode_raw(&link);
        assert!(raw.ends_with(&[0x82, b'h', b'i', 0x05, 0x01, 0x8a, b'M', b'N', b'T', 0, 0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn encoding_is_url_safe() {
        let encoded = DeepLink::new(send()).with_payload(vec![0xfb; 40]).encode();
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn link_without_passphrase() {
        let link = DeepLink::new(send());
        assert_eq!(link.create_link(None), format!("https://bip.to/tx/{}", link.encode()));
        assert_eq!(link.create_link(Some("")), link.create_link(None));
    }

    #[test]
    fn link_with_passphrase() {
        let link = DeepLink::new(send()).create_link(Some("pass"));
        assert!(link.starts_with("https://bip.to/tx/"));
        assert!(link.ends_with("?p=cGFzcw"));
    }
}
