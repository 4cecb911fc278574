//! End-to-end integration tests for the mintx protocol crate.
//!
//! These exercise the public API the way a wallet would: build a payload,
//! wrap it, sign it, encode it, and read it back. The recorded vector at the
//! top pins the wire format byte-for-byte; if it breaks, nodes will reject
//! what we produce.

use mintx_protocol::crypto::{PrivateKey, Signer};
use mintx_protocol::transaction::{
    Address, Amount, ChainId, CreateMultisigData, DeepLink, MultisendData, SendData, SignatureData,
    SignatureType, Transaction, TransactionBuilder, TransactionError, TransactionType, TxData,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

const SENDER_KEY: &str = "07bc17abdcee8b971bb8723e36fe9d2523306d5ab2d683631693238e0f9df142";
const RECIPIENT: &str = "Mx1b685a7c1e78726c48f619c497a07ed75fe00483";

/// Send 1 MNT to RECIPIENT on testnet, signed with SENDER_KEY.
const KNOWN_SIGNED_SEND: &str = "0xf8840102018a4d4e540000000000000001aae98a4d4e5400000000000000941b685a7c1e78726c48f619c497a07ed75fe00483880de0b6b3a7640000808001b845f8431ca01f36e51600baa1d89d2bee64def9ac5d88c518cdefe45e3de66a3cf9fe410de4a01bc2228dc419a97ded0efe6848de906fbe6c659092167ef0e7dcb8d15024123a";

fn one_coin() -> Amount {
    Amount::from(1_000_000_000_000_000_000u128)
}

fn pip(units: u64) -> Amount {
    Amount::from(units) * Amount::from(1_000_000_000_000_000u64)
}

fn unsigned_send() -> Transaction {
    let data = SendData::new().coin("MNT").value(one_coin()).must_to(RECIPIENT);
    TransactionBuilder::new(ChainId::Testnet)
        .new_transaction(data)
        .with_nonce(1)
        .with_gas_price(1)
        .with_gas_coin("MNT")
}

fn sender() -> PrivateKey {
    PrivateKey::from_hex(SENDER_KEY).unwrap()
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[test]
fn signed_send_matches_recorded_vector() {
    let mut tx = unsigned_send();
    tx.sign(&sender(), &[]).unwrap();
    assert_eq!(tx.encode(), KNOWN_SIGNED_SEND);
}

#[test]
fn recorded_vector_decodes_to_its_fields() {
    let tx = Transaction::decode(KNOWN_SIGNED_SEND).unwrap();

    assert_eq!(tx.nonce(), 1);
    assert_eq!(tx.chain_id(), ChainId::Testnet);
    assert_eq!(tx.gas_price(), 1);
    assert_eq!(tx.gas_coin().to_string(), "MNT");
    assert_eq!(tx.tx_type(), TransactionType::Send);
    assert!(tx.payload().is_empty());
    assert!(tx.service_data().is_empty());
    assert_eq!(tx.signature_type(), SignatureType::Single);

    let TxData::Send(data) = tx.data() else {
        panic!("expected a send payload, got {:?}", tx.data());
    };
    assert_eq!(data.coin.to_string(), "MNT");
    assert_eq!(data.to.to_string(), RECIPIENT);
    assert_eq!(data.value, one_coin());

    assert_eq!(tx.sender_address().unwrap(), sender().address());
}

#[test]
fn decode_then_encode_is_identity() {
    let tx = Transaction::decode(KNOWN_SIGNED_SEND).unwrap();
    assert_eq!(tx.encode(), KNOWN_SIGNED_SEND);
}

#[test]
fn roundtrip_preserves_every_field() {
    let key = sender();
    let mut tx = unsigned_send()
        .with_nonce(77)
        .with_gas_price(3)
        .with_gas_coin("BIP")
        .with_payload(&b"thanks for lunch"[..])
        .with_service_data(vec![0xde, 0xad]);
    tx.sign(&key, &[]).unwrap();

    let decoded = Transaction::decode(&tx.encode()).unwrap();
    assert_eq!(decoded, tx);
    assert_eq!(decoded.hash(), tx.hash());
    assert_eq!(decoded.signing_hash(), tx.signing_hash());
}

#[test]
fn encoding_is_deterministic() {
    let mut a = unsigned_send();
    let mut b = unsigned_send();
    a.sign(&sender(), &[]).unwrap();
    b.sign(&sender(), &[]).unwrap();
    assert_eq!(a.encode(), b.encode());
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn known_key_derives_known_address() {
    let key = PrivateKey::from_hex(
        "ecc067573863f893f2195d550ff0d703d31e5a1255791e410ca7ff7cf5f0a7aa",
    )
    .unwrap();
    assert_eq!(
        key.address().to_string(),
        "Mxeeee1973381ab793719fff497b9a516719fcd5a2"
    );
}

// ---------------------------------------------------------------------------
// Decoding failures
// ---------------------------------------------------------------------------

#[test]
fn unregistered_type_is_reported_not_panicked() {
    // Same envelope, type byte 0x01 -> 0x05.
    let tampered = KNOWN_SIGNED_SEND.replacen("4d4e540000000000000001aa", "4d4e540000000000000005aa", 1);
    assert_ne!(tampered, KNOWN_SIGNED_SEND);

    let err = Transaction::decode(&tampered).unwrap_err();
    assert!(
        matches!(err, TransactionError::UnknownTransactionType(0x05)),
        "got {:?}",
        err
    );
}

#[test]
fn truncated_input_is_malformed() {
    let truncated = &KNOWN_SIGNED_SEND[..KNOWN_SIGNED_SEND.len() - 10];
    assert!(matches!(
        Transaction::decode(truncated),
        Err(TransactionError::MalformedEncoding(_))
    ));
}

#[test]
fn garbage_never_panics() {
    for input in ["", "0x", "0x00", "0xc0", "0xf8", "0xc9808080808080808080", "Mt1234"] {
        assert!(Transaction::decode(input).is_err(), "accepted {:?}", input);
    }
}

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

#[test]
fn signing_hash_excludes_signature() {
    let unsigned = unsigned_send();
    let mut signed = unsigned.clone();
    signed.sign(&sender(), &[]).unwrap();

    assert_eq!(unsigned.signing_hash(), signed.signing_hash());
    assert_ne!(unsigned.encode(), signed.encode());
}

#[test]
fn signing_hash_covers_every_other_field() {
    let base = unsigned_send();
    let variants = [
        base.clone().with_nonce(2),
        base.clone().with_gas_price(2),
        base.clone().with_gas_coin("BIP"),
        base.clone().with_payload(vec![1]),
        base.clone().with_service_data(vec![1]),
        base.clone().with_multi_signature_type(),
        TransactionBuilder::new(ChainId::Mainnet)
            .new_transaction(SendData::new().coin("MNT").value(one_coin()).must_to(RECIPIENT))
            .with_nonce(1)
            .with_gas_price(1)
            .with_gas_coin("MNT"),
    ];
    for changed in &variants {
        assert_ne!(changed.signing_hash(), base.signing_hash(), "{:?}", changed);
    }
}

#[test]
fn multisig_signatures_accumulate_in_call_order() {
    let account = PrivateKey::generate();
    let a = PrivateKey::generate();
    let b = PrivateKey::generate();
    let c = PrivateKey::generate();

    let mut tx = unsigned_send().with_multi_signature_type();
    tx.sign(&account, &[&a, &b]).unwrap();
    tx.sign(&account, &[&c]).unwrap();

    let Some(SignatureData::Multi(multi)) = tx.signature().unwrap() else {
        panic!("expected multisig data");
    };
    assert_eq!(multi.multisig, account.address());

    let digest = tx.signing_hash();
    let signers: Vec<Address> = multi
        .signatures
        .iter()
        .map(|sig| sig.recover(&digest).unwrap())
        .collect();
    assert_eq!(signers, vec![a.address(), b.address(), c.address()]);
    assert_eq!(tx.sender_address().unwrap(), account.address());

    let decoded = Transaction::decode(&tx.encode()).unwrap();
    assert_eq!(decoded.signature().unwrap(), tx.signature().unwrap());
}

#[test]
fn offline_cosigners_via_add_signature() {
    let multisig: Address = "Mxeeee1973381ab793719fff497b9a516719fcd5a2".parse().unwrap();
    let a = PrivateKey::generate();
    let b = PrivateKey::generate();

    let mut coordinator = unsigned_send().with_multi_signature_type();
    coordinator.sign_multisig(multisig, &[]).unwrap();

    // Each cosigner signs its own copy and ships back only its signature.
    let mut collected = Vec::new();
    for cosigner in [&a, &b] {
        let mut copy = coordinator.clone();
        copy.sign_multisig(multisig, &[cosigner as &dyn Signer]).unwrap();
        collected.push(copy.first_signature_bytes().unwrap());
    }

    let raw: Vec<&[u8]> = collected.iter().map(Vec::as_slice).collect();
    coordinator.add_signature(&raw).unwrap();

    let Some(SignatureData::Multi(multi)) = coordinator.signature().unwrap() else {
        panic!("expected multisig data");
    };
    assert_eq!(multi.signatures.len(), 2);
    assert_eq!(multi.signatures[0].recover(&coordinator.signing_hash()).unwrap(), a.address());
    assert_eq!(multi.signatures[1].recover(&coordinator.signing_hash()).unwrap(), b.address());
}

#[test]
fn add_signature_with_nothing_fails() {
    let mut tx = unsigned_send().with_multi_signature_type();
    assert!(matches!(
        tx.add_signature(&[]),
        Err(TransactionError::NoSignaturesProvided)
    ));
}

// ---------------------------------------------------------------------------
// Fees
// ---------------------------------------------------------------------------

#[test]
fn fee_without_memo_is_base() {
    assert_eq!(unsigned_send().fee(), pip(10));
}

#[test]
fn fee_is_monotone_in_extra_bytes() {
    let mut previous = unsigned_send().fee();
    for len in 1..=16usize {
        let fee = unsigned_send()
            .with_payload(vec![b'x'; len])
            .with_service_data(vec![0u8; len / 2])
            .fee();
        assert!(fee > previous);
        assert_eq!(fee, pip(10 + 2 * (len + len / 2) as u64));
        previous = fee;
    }
}

#[test]
fn fee_does_not_depend_on_signature() {
    let unsigned = unsigned_send();
    let mut signed = unsigned.clone();
    signed.sign(&sender(), &[]).unwrap();
    assert_eq!(unsigned.fee(), signed.fee());
}

#[test]
fn multisend_fee_and_roundtrip() {
    let item = SendData::new().coin("MNT").value(1u64).must_to(RECIPIENT);
    let data = MultisendData::new()
        .add_item(item.clone())
        .add_item(item.clone())
        .add_item(item);
    let mut tx = TransactionBuilder::new(ChainId::Mainnet)
        .new_transaction(data)
        .with_nonce(9)
        .with_gas_coin("MNT");
    assert_eq!(tx.tx_type(), TransactionType::Multisend);
    assert_eq!(tx.fee(), pip(20));

    tx.sign(&sender(), &[]).unwrap();
    let decoded = Transaction::decode(&tx.encode()).unwrap();
    assert_eq!(decoded.data(), tx.data());
}

#[test]
fn create_multisig_then_spend_from_it() {
    let a = PrivateKey::generate();
    let b = PrivateKey::generate();
    let data = CreateMultisigData::new()
        .threshold(2)
        .add_signer_address(a.address(), 1)
        .add_signer_address(b.address(), 1);

    let mut create = TransactionBuilder::new(ChainId::Testnet)
        .new_transaction(data)
        .with_nonce(1)
        .with_gas_coin("MNT");
    assert_eq!(create.tx_type(), TransactionType::CreateMultisig);
    assert_eq!(create.fee(), pip(100));
    create.sign(&sender(), &[]).unwrap();

    let decoded = Transaction::decode(&create.encode()).unwrap();
    let TxData::CreateMultisig(registered) = decoded.data() else {
        panic!("expected a create-multisig payload, got {:?}", decoded.data());
    };
    assert_eq!(registered.addresses, vec![a.address(), b.address()]);
    assert_eq!(registered.weights, vec![1, 1]);

    let multisig: Address = "Mxeeee1973381ab793719fff497b9a516719fcd5a2".parse().unwrap();
    let mut spend = unsigned_send().with_multi_signature_type();
    spend.sign_multisig(multisig, &[&a, &b]).unwrap();
    assert_eq!(spend.sender_address().unwrap(), multisig);
}

// ---------------------------------------------------------------------------
// Deep links
// ---------------------------------------------------------------------------

#[test]
fn deep_link_carries_payload_kind_and_passphrase() {
    let data = SendData::new().coin("MNT").value(one_coin()).must_to(RECIPIENT);
    let link = DeepLink::new(data).with_payload(&b"coffee"[..]).with_gas_coin("MNT");
    assert_eq!(link.tx_type(), TransactionType::Send);

    let url = link.create_link(Some("secret"));
    let (base, query) = url.split_once('?').unwrap();
    assert_eq!(base, format!("https://bip.to/tx/{}", link.encode()));
    assert_eq!(query, "p=c2VjcmV0");
}
