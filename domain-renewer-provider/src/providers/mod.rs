//! Registrar provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "dnshe")]
mod dnshe;

#[cfg(feature = "dnshe")]
pub use dnshe::{DEFAULT_DNSHE_API_BASE, DnsheProvider};
