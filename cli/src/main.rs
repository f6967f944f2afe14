// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Gallactic CLI
//!
//! Entry point for the `gallactic-cli` binary. Parses CLI arguments,
//! initializes logging, builds an SDK client, and runs one command.
//!
//! Every command prints its result as JSON on stdout; logs go to stderr.
//!
//! - `chain-id`, `info`, `latest-block`, `block`, `block-txns` - node queries
//! - `send`    - build, sign, and broadcast a transfer (`--dry-run` signs only)
//! - `keygen`  - generate a keypair
//! - `version` - print build version information

mod cli;
mod logging;

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde_json::{json, Value};

use gallactic_sdk::crypto::GallacticKeypair;
use gallactic_sdk::transaction::{Participant, Role, TxBody};
use gallactic_sdk::{GallacticClient, SdkConfig};

use cli::{Commands, GallacticCli, SendArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = GallacticCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match run(cli).await? {
        Some(output) => print_json(&output),
        None => Ok(()),
    }
}

/// Runs one command. Returns the JSON to print, or `None` when the command
/// wrote its own output.
async fn run(cli: GallacticCli) -> Result<Option<Value>> {
    let output = match cli.command {
        Commands::Version => {
            print_version();
            return Ok(None);
        }
        Commands::Keygen => keygen(),
        Commands::ChainId => connect(&cli.rpc_url, cli.timeout)?
            .query()
            .chain_id()
            .await
            .context("chain-id query failed")?,
        Commands::Info => connect(&cli.rpc_url, cli.timeout)?
            .query()
            .info()
            .await
            .context("info query failed")?,
        Commands::LatestBlock => connect(&cli.rpc_url, cli.timeout)?
            .query()
            .latest_block()
            .await
            .context("latest-block query failed")?,
        Commands::Block(args) => connect(&cli.rpc_url, cli.timeout)?
            .query()
            .block(args.height)
            .await
            .with_context(|| format!("block query failed at height {}", args.height))?,
        Commands::BlockTxns(args) => connect(&cli.rpc_url, cli.timeout)?
            .query()
            .block_txns(args.height)
            .await
            .with_context(|| format!("block-txns query failed at height {}", args.height))?,
        Commands::Send(args) => send(&connect(&cli.rpc_url, cli.timeout)?, args).await?,
    };
    Ok(Some(output))
}

/// Builds the SDK client for commands that talk to a node.
fn connect(rpc_url: &str, timeout_secs: u64) -> Result<GallacticClient> {
    let config = SdkConfig::default()
        .with_rpc_url(rpc_url)
        .with_request_timeout(Duration::from_secs(timeout_secs));
    let client = GallacticClient::new(config)
        .with_context(|| format!("failed to create client for {rpc_url}"))?;
    tracing::debug!(url = %rpc_url, "client ready");
    Ok(client)
}

/// Builds a single-input transfer, signs it, and broadcasts it unless
/// `--dry-run` is set. Returns the node's response or, for a dry run, the
/// signed envelope.
async fn send(client: &GallacticClient, args: SendArgs) -> Result<Value> {
    let chain_id = match args.chain_id {
        Some(id) => id,
        None => {
            let answer = client
                .query()
                .chain_id()
                .await
                .context("no --chain-id given and the node could not be asked")?;
            chain_id_from(&answer)?
        }
    };

    let mut draft = client.draft().with_unit(args.unit);
    let from = draft
        .build_from_participant(Role::From, Participant::new(args.from, args.amount.as_str()))
        .context("invalid sender")?;
    let to = draft
        .build_from_participant(Role::To, Participant::new(args.to, args.amount.as_str()))
        .context("invalid recipient")?;
    draft.set_tx(TxBody::send(vec![from], vec![to]));
    draft.set_chain_id(chain_id);
    draft.set_sequence(args.sequence);

    let broadcaster = client.broadcaster();
    if args.dry_run {
        let envelope = broadcaster
            .prepare(&mut draft, &args.private_key)
            .context("failed to sign transaction")?;
        return Ok(serde_json::to_value(envelope)?);
    }

    broadcaster
        .broadcast(&mut draft, &args.private_key)
        .await
        .context("broadcast failed")
}

/// Accepts either a bare string or an object carrying `chainId`.
fn chain_id_from(answer: &Value) -> Result<String> {
    answer
        .as_str()
        .or_else(|| answer.get("chainId").and_then(Value::as_str))
        .map(str::to_string)
        .ok_or_else(|| anyhow!("node returned an unrecognized chain id: {answer}"))
}

fn keygen() -> Value {
    let kp = GallacticKeypair::generate();
    json!({
        "publicKey": kp.public_key().encode(),
        "publicKeyHex": kp.public_key().to_hex(),
        "privateKey": kp.to_base58()
    })
}

fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("gallactic-cli {}", env!("CARGO_PKG_VERSION"));
    println!("rustc         {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
