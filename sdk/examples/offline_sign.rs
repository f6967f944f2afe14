//! Offline signing walkthrough.
//!
//! Builds a transfer, stamps and signs it without contacting a node, and
//! prints each intermediate artifact: the converted amounts, the signing
//! message, and the final envelope.
//!
//! Run with:
//!   cargo run -p gallactic-sdk --example offline_sign

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use gallactic_sdk::crypto::GallacticKeypair;
use gallactic_sdk::transaction::{signing_message, Participant, Role, TxBody};
use gallactic_sdk::transport::{NodeRequest, Transport, TransportError};
use gallactic_sdk::units::{from_base_unit, Unit};
use gallactic_sdk::{GallacticClient, SdkConfig};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

fn section(num: u32, title: &str) {
    println!();
    println!("{BOLD}{CYAN}===[{YELLOW} Step {num} {CYAN}]==================================================={RESET}");
    println!("{BOLD}  {title}{RESET}");
}

fn info(label: &str, value: &str) {
    println!("  {BOLD}{label}:{RESET} {YELLOW}{value}{RESET}");
}

/// Refuses every request. Nothing in this walkthrough should reach it.
struct Offline;

#[async_trait]
impl Transport for Offline {
    async fn send(&self, request: NodeRequest) -> Result<Value, TransportError> {
        Err(TransportError::Decode(format!(
            "offline: refused {}",
            request.bc_method
        )))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SdkConfig::default()
        .with_chain_id("gallactic-testnet")
        .with_default_unit(Unit::Standard);
    let client = GallacticClient::with_transport(config, Arc::new(Offline));

    section(1, "Generate a keypair");
    let sender = GallacticKeypair::generate();
    info("public key", &sender.public_key().encode());

    section(2, "Build a transfer of 12.5 standard units");
    let mut draft = client.draft();
    let from = draft.build_from_participant(Role::From, Participant::new("sender-account", "12.5"))?;
    let to = draft.build_from_participant(Role::To, Participant::new("receiver-account", "12.5"))?;
    info("bosons", &from.amount.to_string());
    info("back to milli", &from_base_unit(from.amount, Unit::Milli));
    draft.set_tx(TxBody::send(vec![from], vec![to]));
    draft.set_sequence(41);

    section(3, "Stamp and sign");
    let envelope = client.broadcaster().prepare(&mut draft, &sender.to_base58())?;
    let message = signing_message(&draft)?;
    println!("  {DIM}{}{RESET}", String::from_utf8_lossy(&message));
    info("signature", &envelope.signatories[0].signature);

    section(4, "Envelope ready for submission");
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    println!("{GREEN}  [OK] signed offline{RESET}");

    Ok(())
}
