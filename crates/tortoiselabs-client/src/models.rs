//! Typed request parameters
//!
//! Responses stay untyped (`serde_json::Value`); these types only constrain
//! what callers can send.

use serde::{Deserialize, Serialize};
use std::fmt;

/// HVM boot device order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootOrder {
    /// Disk image, then ISO image
    #[serde(rename = "cd")]
    DiskThenIso,
    /// ISO image, then disk image
    #[serde(rename = "dc")]
    IsoThenDisk,
    /// Disk image only
    #[serde(rename = "c")]
    DiskOnly,
    /// ISO image only
    #[serde(rename = "d")]
    IsoOnly,
}

impl BootOrder {
    /// Wire value sent as `bootorder`
    pub const fn as_str(self) -> &'static str {
        match self {
            BootOrder::DiskThenIso => "cd",
            BootOrder::IsoThenDisk => "dc",
            BootOrder::DiskOnly => "c",
            BootOrder::IsoOnly => "d",
        }
    }
}

impl fmt::Display for BootOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emulated network card for HVM guests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NicType {
    /// Intel e1000
    #[serde(rename = "e1000")]
    E1000,
    /// Paravirtualized virtio NIC
    #[serde(rename = "virtio-net")]
    VirtioNet,
    /// Realtek RTL8139
    #[serde(rename = "rtl8139")]
    Rtl8139,
}

impl NicType {
    /// Wire value sent as `nicktype`
    pub const fn as_str(self) -> &'static str {
        match self {
            NicType::E1000 => "e1000",
            NicType::VirtioNet => "virtio-net",
            NicType::Rtl8139 => "rtl8139",
        }
    }
}

impl fmt::Display for NicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default TTL for new DNS records, in seconds
pub const DEFAULT_TTL: u32 = 300;

/// A DNS record to create in a zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Name within the zone; `@` for the apex
    pub subdomain: String,
    /// Record type, e.g. `A`, `AAAA`, `MX`, `TXT`
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record data
    pub content: String,
    /// Time to live in seconds
    #[serde(default = "default_ttl")]
    pub ttl: u32,
    /// Priority for MX and SRV records
    #[serde(default)]
    pub priority: u32,
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

impl DnsRecord {
    /// Record with TTL 300 and priority 0
    pub fn new(
        subdomain: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            subdomain: subdomain.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl: DEFAULT_TTL,
            priority: 0,
        }
    }

    /// Override the TTL
    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the priority
    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }
}
