//! # CLI Interface
//!
//! Defines the command-line argument structure for `gallactic-cli` using
//! `clap` derive. Query subcommands map one-to-one onto the SDK's query
//! facade; `send` builds, signs, and (unless `--dry-run`) broadcasts a
//! transfer.

use clap::{Args, Parser, Subcommand};

use gallactic_sdk::config::DEFAULT_RPC_URL;
use gallactic_sdk::Unit;

use crate::logging::LogFormat;

/// Command-line client for Gallactic nodes.
#[derive(Parser, Debug)]
#[command(
    name = "gallactic-cli",
    about = "Query a Gallactic node and sign or broadcast transactions",
    version,
    propagate_version = true
)]
pub struct GallacticCli {
    /// JSON-RPC endpoint of the node.
    #[arg(long, global = true, env = "GALLACTIC_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Default log level when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the chain id the node serves.
    ChainId,
    /// Print node information.
    Info,
    /// Print the latest block.
    LatestBlock,
    /// Print the block at a height.
    Block(HeightArgs),
    /// Print the transactions of the block at a height.
    BlockTxns(HeightArgs),
    /// Build, sign, and broadcast a transfer.
    Send(SendArgs),
    /// Generate a fresh keypair and print it.
    Keygen,
    /// Print version information and exit.
    Version,
}

/// A block height.
#[derive(Args, Debug)]
pub struct HeightArgs {
    #[arg(long)]
    pub height: u64,
}

/// Arguments for the `send` subcommand.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Sending account address.
    #[arg(long)]
    pub from: String,

    /// Receiving account address.
    #[arg(long)]
    pub to: String,

    /// Amount in `--unit`, e.g. `1.5`.
    #[arg(long)]
    pub amount: String,

    /// Unit the amount is expressed in: boson, milli, or standard.
    #[arg(long, default_value = "standard")]
    pub unit: Unit,

    /// Target chain id. When omitted, the node is asked.
    #[arg(long, env = "GALLACTIC_CHAIN_ID")]
    pub chain_id: Option<String>,

    /// Current sequence of the sending account.
    #[arg(long)]
    pub sequence: u64,

    /// Base58 private key of the sending account.
    ///
    /// Prefer the environment variable over the flag so the key stays out
    /// of shell history.
    #[arg(long, env = "GALLACTIC_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Sign and print the envelope without broadcasting it.
    #[arg(long)]
    pub dry_run: bool,
}
