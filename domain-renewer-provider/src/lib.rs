//! # domain-renewer-provider
//!
//! Registrar API abstraction for keeping free domains alive: list the
//! domains an account owns and ask the registrar to renew each one.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [DNSHE](https://www.dnshe.com/) | `dnshe` | `X-API-Key` / `X-API-Secret` headers |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)* — Enable all providers listed above.
//! - **`dnshe`** — Enable only the DNSHE provider.
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for CI runners and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_renewer_provider::{
//!     create_provider, Account, ProviderError, ProviderOptions, ProviderType, RenewalProvider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderType::Dnshe, ProviderOptions::default())?;
//!     let account = Account::new("your-key", "your-secret");
//!
//!     for domain in provider.list_domains(&account).await? {
//!         match provider.renew_domain(&account, &domain).await {
//!             Ok(receipt) => println!("{} renewed until {:?}", domain.name, receipt.new_expires_at),
//!             Err(ProviderError::NotRenewable { .. }) => println!("{} not due yet", domain.name),
//!             Err(e) => eprintln!("{}: {e}", domain.name),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//!
//! - [`ProviderError::InvalidCredentials`] — authentication failed
//! - [`ProviderError::NotRenewable`] — the registrar declined because the domain is not due
//! - [`ProviderError::RateLimited`] — API rate limit exceeded
//! - [`ProviderError::NetworkError`] — network connectivity issue
//!
//! Requests are attempted exactly once; callers decide what a failure means.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::RenewalProvider;

// Re-export types
pub use types::{Account, Domain, DomainId, ProviderOptions, ProviderType, RenewalReceipt};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "dnshe")]
pub use providers::{DEFAULT_DNSHE_API_BASE, DnsheProvider};
