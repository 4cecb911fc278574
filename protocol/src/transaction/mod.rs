//! # Transaction Module
//!
//! Construction, fee pricing, hashing, signing and decoding of ledger
//! transactions.
//!
//! ## Architecture
//!
//! ```text
//! types.rs     Fixed-width values (CoinSymbol, Address, PublicKey) and discriminants
//! data.rs      Payload variants and the closed TxData enum
//! builder.rs   TransactionBuilder, the Transaction envelope, encode/decode/fee/hash
//! signature.rs Single and multisig signature containers
//! signing.rs   Signing hash, single and multisig signing, signature attachment
//! deeplink.rs  Unsigned payloads packed into a shareable URL
//! error.rs     TransactionError
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: pick a payload variant and hand it to a [`TransactionBuilder`].
//! 2. **Fill in**: nonce, gas price, gas coin, memo via the `with_*` setters.
//! 3. **Sign**: [`Transaction::sign`] with a [`crate::crypto::Signer`].
//! 4. **Encode**: [`Transaction::encode`] gives the `0x...` transport string.
//!
//! [`Transaction::decode`] reverses step 4.
//!
//! ## Design Decisions
//!
//! - Two different hashes. The signing hash is Keccak-256 over every field
//!   but the signature. The identifier (`Mt...`) is SHA-256 over the whole
//!   encoding and changes when the signature does.
//! - Amounts are 256-bit unsigned integers in pip. No floating point.
//! - The payload set is a closed enum, so an unknown kind can only show up
//!   when decoding foreign bytes.

pub mod builder;
pub mod data;
pub mod deeplink;
pub mod error;
pub mod signature;
pub mod signing;
pub mod types;

pub use builder::{Transaction, TransactionBuilder};
pub use data::{
    BuyCoinData, CreateMultisigData, DelegateData, MultisendData, SellAllCoinData, SellCoinData,
    SendData, SetCandidateOffData, SetCandidateOnData, TxData, UnbondData,
};
pub use deeplink::DeepLink;
pub use error::TransactionError;
pub use signature::{Signature, SignatureData, SignatureMulti};
pub use types::{Address, Amount, ChainId, CoinSymbol, PublicKey, SignatureType, TransactionType};
