// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # mintx
//!
//! Entry point for the `mintx` binary. Parses CLI arguments, initializes
//! logging and dispatches to a subcommand:
//!
//! - `send`     build and sign a transfer
//! - `decode`   print an encoded transaction as JSON
//! - `deeplink` build an unsigned deep link
//! - `address`  derive (or generate) an account address
//! - `version`  print build version information

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use mintx_protocol::crypto::PrivateKey;
use mintx_protocol::transaction::{
    Address, ChainId, CoinSymbol, DeepLink, SendData, SignatureType, Transaction,
    TransactionBuilder, TransactionType, TxData,
};

use cli::{Commands, MintxCli};

fn main() -> Result<()> {
    let cli = MintxCli::parse();
    logging::init_logging("mintx=info,mintx_protocol=info", cli.log_format);

    match cli.command {
        Commands::Send(args) => send(args),
        Commands::Decode(args) => decode(args),
        Commands::Deeplink(args) => deeplink(args),
        Commands::Address(args) => address(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

fn transfer_data(args: &cli::TransferArgs) -> Result<SendData> {
    SendData::new()
        .coin(&args.coin)
        .value(args.value)
        .to(&args.to)
        .with_context(|| format!("invalid recipient {}", args.to))
}

/// Signed transfer, as printed by `send`.
#[derive(Serialize)]
struct SendOutput {
    encoded: String,
    hash: String,
    sender: Address,
    fee: String,
}

fn send(args: cli::SendArgs) -> Result<()> {
    let key = PrivateKey::from_hex(&args.private_key).context("failed to parse private key")?;
    let data = transfer_data(&args.transfer)?;

    let mut tx = TransactionBuilder::new(args.chain)
        .new_transaction(data)
        .with_nonce(args.nonce)
        .with_gas_price(args.gas_price)
        .with_gas_coin(&args.gas_coin);
    if let Some(payload) = &args.transfer.payload {
        tx = tx.with_payload(payload.clone().into_bytes());
    }

    tx.sign(&key, &[]).context("failed to sign transaction")?;

    tracing::info!(
        chain = %args.chain,
        nonce = args.nonce,
        sender = %key.address(),
        "transaction signed"
    );

    print_json(&SendOutput {
        encoded: tx.encode(),
        hash: tx.hash(),
        sender: key.address(),
        fee: tx.fee().to_string(),
    })
}

/// Human-readable view of a decoded transaction.
#[derive(Serialize)]
struct DecodedTransaction<'a> {
    hash: String,
    nonce: u64,
    chain_id: ChainId,
    gas_price: u8,
    gas_coin: CoinSymbol,
    #[serde(rename = "type")]
    tx_type: TransactionType,
    data: &'a TxData,
    payload: String,
    service_data: String,
    signature_type: SignatureType,
    sender: Option<Address>,
    fee: String,
}

fn decode(args: cli::DecodeArgs) -> Result<()> {
    let tx = Transaction::decode(args.encoded.trim()).context("failed to decode transaction")?;

    let sender = match tx.sender_address() {
        Ok(address) => Some(address),
        Err(e) => {
            tracing::warn!(error = %e, "sender not recoverable");
            None
        }
    };

    print_json(&DecodedTransaction {
        hash: tx.hash(),
        nonce: tx.nonce(),
        chain_id: tx.chain_id(),
        gas_price: tx.gas_price(),
        gas_coin: tx.gas_coin(),
        tx_type: tx.tx_type(),
        data: tx.data(),
        payload: String::from_utf8_lossy(tx.payload()).into_owned(),
        service_data: hex::encode(tx.service_data()),
        signature_type: tx.signature_type(),
        sender,
        fee: tx.fee().to_string(),
    })
}

fn deeplink(args: cli::DeeplinkArgs) -> Result<()> {
    let mut link = DeepLink::new(transfer_data(&args.transfer)?);
    if let Some(payload) = &args.transfer.payload {
        link = link.with_payload(payload.clone().into_bytes());
    }
    if let Some(nonce) = args.nonce {
        link = link.with_nonce(nonce);
    }
    if let Some(price) = args.gas_price {
        link = link.with_gas_price(price);
    }
    if let Some(coin) = &args.gas_coin {
        link = link.with_gas_coin(coin);
    }

    println!("{}", link.create_link(args.passphrase.as_deref()));
    Ok(())
}

#[derive(Serialize)]
struct AddressOutput {
    address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
}

fn address(args: cli::AddressArgs) -> Result<()> {
    let output = match (&args.private_key, args.generate) {
        (Some(hex_key), _) => {
            let key = PrivateKey::from_hex(hex_key).context("failed to parse private key")?;
            AddressOutput {
                address: key.address(),
                private_key: None,
            }
        }
        (None, true) => {
            let key = PrivateKey::generate();
            AddressOutput {
                address: key.address(),
                private_key: Some(key.to_hex()),
            }
        }
        (None, false) => anyhow::bail!("pass --private-key (or MINTX_PRIVATE_KEY) or --generate"),
    };
    print_json(&output)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("mintx          {}", env!("CARGO_PKG_VERSION"));
    println!("mainnet chain  {}", ChainId::Mainnet as u8);
    println!("testnet chain  {}", ChainId::Testnet as u8);
}
