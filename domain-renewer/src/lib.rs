//! Domain Renewer
//!
//! Renews free DNSHE domains for every configured account and reports the outcome:
//! - Account list parsing and run configuration (`accounts`, `config`)
//! - The sequential renewal pass (`runner`)
//! - Markdown summary rendering and output (`report`, `summary`)
//!
//! The library holds no global state; everything the run needs is carried by
//! [`RenewerConfig`] so tests can inject fixtures instead of environment variables.

pub mod accounts;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod summary;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use accounts::{load_accounts, AccountLabel};
pub use config::RenewerConfig;
pub use error::{ConfigError, ConfigResult, RenewerError, RenewerResult};
pub use report::render_report;
pub use runner::{AccountRun, RenewalResult, RenewalStatus, RunReport, Runner};
pub use summary::SummaryTarget;
