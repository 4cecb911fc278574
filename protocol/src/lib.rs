// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # mintx Protocol: Core Library
//!
//! Builds, prices, hashes, signs and decodes transactions for a
//! proof-of-stake ledger, byte-for-byte compatible with what the nodes
//! expect.
//!
//! ## Architecture
//!
//! - **config**: wire constants. Prefixes, chain ids, fee units.
//! - **codec**: canonical (RLP) encoding helpers.
//! - **crypto**: secp256k1 keys, the `Signer` seam, Keccak-256 and SHA-256.
//! - **transaction**: payload variants, the envelope, signing, deep links.
//! - **client**: the async trait a node client implements.
//!
//! ## What this crate does not do
//!
//! It never checks a transaction against chain state (balances, nonces,
//! candidates), never opens a socket, and never stores keys. It takes a key,
//! signs a digest, and hands back bytes.
//!
//! ## Quick start
//!
//! ```
//! use mintx_protocol::crypto::PrivateKey;
//! use mintx_protocol::transaction::{ChainId, SendData, TransactionBuilder};
//!
//! let key = PrivateKey::from_hex(
//!     "07bc17abdcee8b971bb8723e36fe9d2523306d5ab2d683631693238e0f9df142",
//! )?;
//! let data = SendData::new()
//!     .coin("MNT")
//!     .value(1_000_000_000_000_000_000u128)
//!     .to("Mx1b685a7c1e78726c48f619c497a07ed75fe00483")?;
//!
//! let mut tx = TransactionBuilder::new(ChainId::Testnet)
//!     .new_transaction(data)
//!     .with_nonce(1)
//!     .with_gas_price(1)
//!     .with_gas_coin("MNT");
//! tx.sign(&key, &[])?;
//!
//! assert!(tx.encode().starts_with("0xf884"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod transaction;

pub use client::{ChainClient, SendResult};
pub use crypto::{PrivateKey, Signer};
pub use transaction::{Transaction, TransactionBuilder, TransactionError};
