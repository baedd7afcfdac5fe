//! TortoiseLabs REST API Client
//!
//! A Rust client library for the TortoiseLabs VPS hosting API. Requests are
//! authenticated with HTTP Basic auth (username + API key) and responses are
//! returned as untyped `serde_json::Value`s.
//!
//! # Example
//!
//! ```no_run
//! use tortoiselabs_client::{BootOrder, DnsRecord, TortoiseLabsClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TortoiseLabsClient::new("username", "your-api-key")?;
//!
//! // id -> name for every VPS on the account
//! let mine = client.vps().list_my().await?;
//! for (id, name) in &mine {
//!     println!("{id}: {name}");
//! }
//!
//! // Boot from ISO first, then power cycle
//! client.vps().hvm_set_boot_order(42, BootOrder::IsoThenDisk).await?;
//! client.vps().power_cycle(42).await?;
//!
//! // Add an A record
//! let record = DnsRecord::new("www", "A", "192.0.2.10");
//! client.dns().new_record(7, &record).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **VPS**: signup, imaging, HVM ISO/boot/NIC settings, power control, jobs
//! - **DNS**: zones and records
//! - **Support**: tickets and replies
//! - **Billing**: invoices and service credit
//! - **Mocking**: the `test-util` feature exposes [`MockTransport`]

pub mod billing;
pub mod client;
pub mod common;
pub mod config;
pub mod dns;
pub mod error;
pub mod models;
pub mod support;
#[path = "trait.rs"]
pub mod transport_trait;
pub mod vps;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use billing::Billing;
pub use client::TortoiseLabsClient;
pub use common::{ApiRequest, HttpMethod, HttpTransport, RawResponse};
pub use config::{ClientConfig, Credentials, DEFAULT_BASE_URL};
pub use dns::Dns;
pub use error::TortoiseLabsError;
pub use models::*;
pub use support::Support;
pub use transport_trait::Transport;
pub use vps::Vps;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockTransport;
