//! # Protocol Configuration & Constants
//!
//! Every wire-level magic number lives here. If you're hardcoding a prefix
//! or a fee unit somewhere else, move it here first.
//!
//! These values are dictated by the chain, not by us. Nodes reject anything
//! that disagrees with them byte-for-byte, so treat every change in this
//! file as a compatibility break.

// ---------------------------------------------------------------------------
// Chain Identifiers
// ---------------------------------------------------------------------------

/// Main network chain id.
pub const CHAIN_ID_MAINNET: u8 = 1;

/// Test network chain id.
pub const CHAIN_ID_TESTNET: u8 = 2;

// ---------------------------------------------------------------------------
// Human-Readable Prefixes
// ---------------------------------------------------------------------------

/// Prefix of an account address string (`Mx` + 40 hex chars).
pub const ADDRESS_PREFIX: &str = "Mx";

/// Prefix of a validator candidate public key string (`Mp` + 64 hex chars).
pub const PUBLIC_KEY_PREFIX: &str = "Mp";

/// Prefix of a transaction identifier (`Mt` + 64 hex chars of SHA-256).
pub const TX_HASH_PREFIX: &str = "Mt";

/// Prefix of an encoded transaction transport string.
pub const TX_TRANSPORT_PREFIX: &str = "0x";

// ---------------------------------------------------------------------------
// Field Widths
// ---------------------------------------------------------------------------

/// Coin symbols occupy a fixed 10-byte slot, zero padded on the right.
pub const COIN_SYMBOL_LENGTH: usize = 10;

/// Account addresses are the trailing 20 bytes of a Keccak-256 digest.
pub const ADDRESS_LENGTH: usize = 20;

/// Candidate public keys are 32 bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// secp256k1 secret scalars are 32 bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Recoverable ECDSA signature: `r (32) || s (32) || recovery id (1)`.
pub const RECOVERABLE_SIGNATURE_LENGTH: usize = 65;

/// Offset added to the recovery id before it goes on the wire.
pub const SIGNATURE_V_OFFSET: u8 = 27;

// ---------------------------------------------------------------------------
// Fee Parameters
// ---------------------------------------------------------------------------

/// Price of a single fee unit in the smallest denomination (10^15 pip).
pub const FEE_UNIT_PRICE: u64 = 1_000_000_000_000_000;

/// Fee units charged per byte of memo or service data.
pub const FEE_UNITS_PER_EXTRA_BYTE: u64 = 2;

/// Fee units for a plain transfer.
pub const FEE_UNITS_SEND: u64 = 10;

/// Fee units for selling, selling everything, or buying a coin.
pub const FEE_UNITS_CONVERT: u64 = 100;

/// Fee units for delegating to or unbonding from a candidate.
pub const FEE_UNITS_STAKE: u64 = 200;

/// Fee units for switching a candidate on or off.
pub const FEE_UNITS_CANDIDATE_SWITCH: u64 = 100;

/// Fee units for registering a multisig account.
pub const FEE_UNITS_CREATE_MULTISIG: u64 = 100;

/// Fee units for each additional recipient of a multisend, on top of
/// [`FEE_UNITS_SEND`] for the first one.
pub const FEE_UNITS_MULTISEND_EXTRA: u64 = 5;

// ---------------------------------------------------------------------------
// Deep Links
// ---------------------------------------------------------------------------

/// Scheme of deep-link URIs.
pub const DEEP_LINK_SCHEME: &str = "https";

/// Host that resolves deep links into a wallet signing prompt.
pub const DEEP_LINK_HOST: &str = "bip.to";

/// Path segment in front of the encoded deep link.
pub const DEEP_LINK_PATH: &str = "/tx/";

/// Query key carrying the (obfuscated) passphrase.
pub const DEEP_LINK_PASSPHRASE_KEY: &str = "p";

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Returns a friendly name for a chain id, mainly for logging.
pub fn chain_name(chain_id: u8) -> String {
    match chain_id {
        CHAIN_ID_MAINNET => "mainnet".to_string(),
        CHAIN_ID_TESTNET => "testnet".to_string(),
        other => format!("unknown({})", other),
    }
}
