//! The seam to a ledger node.
//!
//! This crate never talks to the network itself. Anything that can count an
//! account's transactions and accept a transport string implements
//! [`ChainClient`]; gRPC, HTTP and in-memory test doubles all fit.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::transaction::{Address, Transaction};

/// What a node reports after accepting a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    /// Node-reported status code; zero means accepted.
    pub code: u32,
    /// `Mt...` identifier of the accepted transaction.
    pub hash: String,
    #[serde(default)]
    pub log: String,
}

#[async_trait]
pub trait ChainClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// How many transactions `address` has sent so far.
    async fn transaction_count(&self, address: &Address) -> Result<u64, Self::Error>;

    /// Submit an encoded (`0x...`) transaction.
    async fn send_transaction(&self, encoded: &str) -> Result<SendResult, Self::Error>;
}

/// The nonce the next transaction from `address` must carry.
///
/// Saturates at `u64::MAX` rather than wrapping.
pub async fn next_nonce<C: ChainClient + ?Sized>(
    client: &C,
    address: &Address,
) -> Result<u64, C::Error> {
    Ok(client.transaction_count(address).await?.saturating_add(1))
}

/// Submit a signed transaction.
pub async fn submit<C: ChainClient + ?Sized>(
    client: &C,
    tx: &Transaction,
) -> Result<SendResult, C::Error> {
    tracing::debug!(hash = %tx.hash(), nonce = tx.nonce(), "submitting transaction");
    client.send_transaction(&tx.encode()).await
}
