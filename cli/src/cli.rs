//! # CLI Interface
//!
//! Defines the command-line argument structure for `mintx` using `clap`
//! derive. Subcommands: `send`, `decode`, `deeplink`, `address`, `version`.

use clap::{Args, Parser, Subcommand};
use mintx_protocol::transaction::{Amount, ChainId};

use crate::logging::LogFormat;

/// Build, sign and inspect ledger transactions.
///
/// Nothing is broadcast: `send` prints the signed transport string, which
/// any node client can submit.
#[derive(Parser, Debug)]
#[command(name = "mintx", about = "Build, sign and inspect ledger transactions", version, propagate_version = true)]
pub struct MintxCli {
    /// Log output format. Logs go to stderr; results go to stdout.
    #[arg(long, global = true, value_enum, env = "MINTX_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and sign a transfer, printing the encoded transaction.
    Send(SendArgs),
    /// Decode a `0x...` transaction and print it as JSON.
    Decode(DecodeArgs),
    /// Build an unsigned deep link for a transfer.
    Deeplink(DeeplinkArgs),
    /// Print the address of a private key, or of a freshly generated one.
    Address(AddressArgs),
    /// Print version information and exit.
    Version,
}

/// Recipient, coin and amount of a transfer.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Recipient address (`Mx...`).
    #[arg(long)]
    pub to: String,

    /// Amount in pip (10^-18 of a coin), as a decimal integer.
    #[arg(long, value_parser = parse_amount)]
    pub value: Amount,

    /// Coin to send.
    #[arg(long, default_value = "MNT")]
    pub coin: String,

    /// Memo attached to the transaction. Costs 2 fee units per byte.
    #[arg(long)]
    pub payload: Option<String>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub transfer: TransferArgs,

    /// Hex-encoded secp256k1 private key of the sender.
    ///
    /// **Prefer the environment variable** over the flag; flags end up in
    /// shell history.
    #[arg(long, env = "MINTX_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Network the transaction is bound to.
    #[arg(long, env = "MINTX_CHAIN", value_parser = parse_chain, default_value = "mainnet")]
    pub chain: ChainId,

    /// Sender nonce: the sender's transaction count plus one.
    #[arg(long)]
    pub nonce: u64,

    #[arg(long, default_value_t = 1)]
    pub gas_price: u8,

    #[arg(long, default_value = "MNT")]
    pub gas_coin: String,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Encoded transaction, including the `0x` prefix.
    pub encoded: String,
}

#[derive(Args, Debug)]
pub struct DeeplinkArgs {
    #[command(flatten)]
    pub transfer: TransferArgs,

    #[arg(long)]
    pub nonce: Option<u64>,

    #[arg(long)]
    pub gas_price: Option<u8>,

    #[arg(long)]
    pub gas_coin: Option<String>,

    /// Passphrase appended to the link. Obfuscated, not encrypted.
    #[arg(long)]
    pub passphrase: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddressArgs {
    /// Hex-encoded private key. Omit together with `--generate` for a new key.
    #[arg(long, env = "MINTX_PRIVATE_KEY", hide_env_values = true, conflicts_with = "generate")]
    pub private_key: Option<String>,

    /// Generate a new key and print it along with its address.
    #[arg(long)]
    pub generate: bool,
}

fn parse_amount(s: &str) -> Result<Amount, String> {
    s.parse::<Amount>().map_err(|e| format!("invalid amount {:?}: {}", s, e))
}

fn parse_chain(s: &str) -> Result<ChainId, String> {
    s.parse()
}
