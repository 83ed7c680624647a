use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_key;

// ============ Provider Types ============

/// Identifies which registrar implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// DNSHE free domain registrar. Requires feature `dnshe`.
    #[cfg(feature = "dnshe")]
    Dnshe,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "dnshe")]
            Self::Dnshe => write!(f, "dnshe"),
        }
    }
}

/// Connection options shared by every provider.
///
/// # Default
///
/// Official API endpoint, 10 s connect timeout, 30 s request timeout.
#[derive(Debug, Clone)]
pub struct ProviderOptions {
    /// Override for the provider's API base URL (mirrors, tests).
    pub api_base: Option<String>,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            api_base: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

// ============ Account ============

/// API credential pair identifying one registrant.
///
/// `Debug` never prints the secret, and only a masked form of the key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Public API key.
    pub key: String,
    /// API secret.
    pub secret: String,
}

impl Account {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Key with everything after the first characters masked, safe for logs and reports.
    pub fn masked_key(&self) -> String {
        mask_key(&self.key)
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("key", &self.masked_key())
            .field("secret", &"<redacted>")
            .finish()
    }
}

// ============ Domain Types ============

/// Registrar-side identifier of a domain.
///
/// Registrars return either numbers or strings; the original representation is
/// kept so it can be sent back unchanged in renewal requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainId {
    /// Numeric identifier.
    Numeric(u64),
    /// String identifier.
    Text(String),
}

impl DomainId {
    /// `0` and blank strings mean the registrar did not assign an id.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Numeric(n) => *n == 0,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A domain registered under an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Registrar identifier; `None` when the registrar listed the domain without one.
    pub id: Option<DomainId>,
    /// Fully qualified name (e.g., `"blog.example.com"`).
    pub name: String,
    /// Registrar status string, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Expiry metadata as reported by the registrar (opaque).
    #[serde(rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl Domain {
    /// A domain can only be submitted for renewal when it has an id.
    pub fn is_renewable(&self) -> bool {
        self.id.is_some()
    }
}

/// Successful renewal acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalReceipt {
    /// Renewed domain name.
    pub domain: String,
    /// New expiry time reported by the registrar, if any.
    #[serde(rename = "newExpiresAt", skip_serializing_if = "Option::is_none")]
    pub new_expires_at: Option<String>,
    /// Registrar's own confirmation message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
