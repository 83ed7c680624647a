//! Run configuration
//!
//! Everything the run reads from the process environment is collected here,
//! once, in `main`. Library code receives a [`RenewerConfig`] value and never
//! touches the environment itself.

use std::path::PathBuf;

use domain_renewer_provider::{Account, ProviderOptions};
use url::Url;

use crate::accounts::load_accounts;
use crate::error::{ConfigError, ConfigResult};
use crate::summary::SummaryTarget;

/// JSON array of `{"key", "secret"}` credential pairs.
pub const ACCOUNTS_ENV: &str = "ACCOUNTS_JSON";

/// Optional override for the registrar API base URL.
pub const API_BASE_ENV: &str = "DNSHE_API_BASE";

/// File the Markdown summary is written to; stdout when unset.
pub const SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Complete input of one run.
#[derive(Debug, Clone)]
pub struct RenewerConfig {
    /// Accounts in the order they were configured.
    pub accounts: Vec<Account>,
    /// Registrar connection options.
    pub provider: ProviderOptions,
    /// Where the rendered report goes.
    pub summary: SummaryTarget,
}

impl RenewerConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let raw_accounts = var(ACCOUNTS_ENV).ok_or(ConfigError::MissingVariable(ACCOUNTS_ENV))?;
        let accounts = load_accounts(&raw_accounts)?;

        let api_base = var(API_BASE_ENV)
            .map(|value| validate_api_base(value.trim()))
            .transpose()?;

        let summary = var(SUMMARY_ENV).map_or(SummaryTarget::Stdout, |path| {
            SummaryTarget::File(PathBuf::from(path))
        });

        Ok(Self {
            accounts,
            provider: ProviderOptions {
                api_base,
                ..ProviderOptions::default()
            },
            summary,
        })
    }
}

fn validate_api_base(value: &str) -> ConfigResult<String> {
    let invalid = |reason: String| ConfigError::InvalidApiBase {
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
