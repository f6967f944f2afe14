// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Gallactic SDK
//!
//! Client-side library for a Gallactic chain node: query the chain, build
//! transactions, sign them, and broadcast them.
//!
//! ## Architecture
//!
//! - **units**: Conversion between display amounts and bosons.
//! - **crypto**: Ed25519 keys, hashing, and the `CryptoBackend` seam.
//! - **transaction**: Drafts, sequence stamping, signing, and broadcast.
//! - **transport**: The `Transport` trait and its JSON-RPC/HTTP implementation.
//! - **query**: Read-only chain and block queries.
//! - **client**: One handle over all of the above.
//! - **config**: Constants, method names, and client configuration.
//!
//! ## Sending a transfer
//!
//! ```no_run
//! use gallactic_sdk::transaction::{Participant, Role, TxBody};
//! use gallactic_sdk::{GallacticClient, SdkConfig};
//!
//! # async fn run(private_key: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let client = GallacticClient::new(SdkConfig::default().with_chain_id("gallactic-testnet"))?;
//!
//! let mut draft = client.draft();
//! let from = draft.build_from_participant(Role::From, Participant::new("A1", "1.5"))?;
//! let to = draft.build_from_participant(Role::To, Participant::new("A2", "1.5"))?;
//! draft.set_tx(TxBody::send(vec![from], vec![to]));
//! draft.set_sequence(5);
//!
//! let receipt = client.broadcaster().broadcast(&mut draft, private_key).await?;
//! println!("{receipt}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod crypto;
pub mod query;
pub mod transaction;
pub mod transport;
pub mod units;

pub use client::GallacticClient;
pub use config::{MethodNames, SdkConfig};
pub use crypto::{CryptoBackend, Ed25519Backend, GallacticKeypair};
pub use query::NodeQuery;
pub use transaction::{Broadcaster, TransactionDraft, TransactionError};
pub use transport::{HttpTransport, NodeRequest, Transport, TransportError};
pub use units::Unit;
