//! Renewal pass
//!
//! One sequential walk over every account and every domain it owns. Nothing
//! that happens to a single account or domain stops the walk; failures are
//! recorded in the [`RunReport`] and the pass moves on.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};
use domain_renewer_provider::{Account, Domain, ProviderError, RenewalProvider};

use crate::accounts::AccountLabel;

// ============ Result Types ============

/// Outcome class of one renewal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalStatus {
    /// The registrar renewed the domain.
    Success,
    /// The domain was not renewed and that is expected (not due yet, no id).
    Skipped,
    /// The attempt failed.
    Failed,
}

impl RenewalStatus {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Skipped => "⏭️",
            Self::Failed => "❌",
        }
    }
}

impl fmt::Display for RenewalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Skipped => write!(f, "Skipped"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Outcome of renewing one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalResult {
    pub account: AccountLabel,
    pub domain: String,
    pub status: RenewalStatus,
    /// Human-readable detail: new expiry on success, registrar message otherwise.
    pub message: String,
}

/// Everything that happened to one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRun {
    pub account: AccountLabel,
    /// Set when the domain list could not be fetched; `results` is then empty.
    pub listing_error: Option<String>,
    /// One entry per listed domain, in listing order.
    pub results: Vec<RenewalResult>,
}

/// Outcome of a complete run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: DateTime<Local>,
    /// One entry per configured account, in input order.
    pub accounts: Vec<AccountRun>,
}

impl RunReport {
    /// All per-domain results across accounts, in processing order.
    pub fn results(&self) -> impl Iterator<Item = &RenewalResult> {
        self.accounts.iter().flat_map(|run| run.results.iter())
    }

    pub fn count(&self, status: RenewalStatus) -> usize {
        self.results().filter(|r| r.status == status).count()
    }

    /// Accounts whose domain list could not be fetched.
    pub fn failed_listings(&self) -> usize {
        self.accounts
            .iter()
            .filter(|run| run.listing_error.is_some())
            .count()
    }
}

// ============ Runner ============

/// Drives one renewal pass over a fixed account list.
pub struct Runner {
    provider: Arc<dyn RenewalProvider>,
    accounts: Vec<Account>,
}

impl Runner {
    pub fn new(provider: Arc<dyn RenewalProvider>, accounts: Vec<Account>) -> Self {
        Self { provider, accounts }
    }

    /// Fetch every domain registered under `account`.
    pub async fn list_domains(
        &self,
        label: &AccountLabel,
        account: &Account,
    ) -> Result<Vec<Domain>, ProviderError> {
        match self.provider.list_domains(account).await {
            Ok(domains) => {
                tracing::info!("{label}: {} domain(s) found", domains.len());
                Ok(domains)
            }
            Err(e) => {
                if e.is_expected() {
                    tracing::warn!("{label}: failed to list domains: {e}");
                } else {
                    tracing::error!("{label}: failed to list domains: {e}");
                }
                Err(e)
            }
        }
    }

    /// Try to renew one domain. Never fails; the outcome is in the result.
    pub async fn renew_domain(
        &self,
        label: &AccountLabel,
        account: &Account,
        domain: &Domain,
    ) -> RenewalResult {
        let (status, message) = if domain.is_renewable() {
            match self.provider.renew_domain(account, domain).await {
                Ok(receipt) => {
                    let expiry = receipt.new_expires_at.as_deref().unwrap_or("unknown");
                    tracing::info!("{label}: {} renewed, new expiry {expiry}", domain.name);
                    (RenewalStatus::Success, format!("New expiry: {expiry}"))
                }
                Err(e @ ProviderError::NotRenewable { .. }) => {
                    tracing::info!("{label}: {} skipped: {}", domain.name, e.raw_message());
                    (RenewalStatus::Skipped, e.raw_message())
                }
                Err(e) => {
                    if e.is_expected() {
                        tracing::warn!("{label}: {} renewal failed: {e}", domain.name);
                    } else {
                        tracing::error!("{label}: {} renewal failed: {e}", domain.name);
                    }
                    (RenewalStatus::Failed, e.raw_message())
                }
            }
        } else {
            tracing::warn!("{label}: {} has no domain id, skipping", domain.name);
            (
                RenewalStatus::Skipped,
                "No domain id reported; cannot renew".to_string(),
            )
        };

        RenewalResult {
            account: label.clone(),
            domain: domain.name.clone(),
            status,
            message,
        }
    }

    /// Process every account, then every domain, in order.
    pub async fn run(&self) -> RunReport {
        let started_at = Local::now();
        tracing::info!(
            "Starting renewal run for {} account(s) via {}",
            self.accounts.len(),
            self.provider.id()
        );

        let mut accounts = Vec::with_capacity(self.accounts.len());
        for (index, account) in self.accounts.iter().enumerate() {
            let label = AccountLabel::new(index + 1, account);
            tracing::info!("{label}: processing (fingerprint {})", label.fingerprint);

            let run = match self.list_domains(&label, account).await {
                Ok(domains) => {
                    let mut results = Vec::with_capacity(domains.len());
                    for domain in &domains {
                        results.push(self.renew_domain(&label, account, domain).await);
                    }
                    AccountRun {
                        account: label,
                        listing_error: None,
                        results,
                    }
                }
                Err(e) => AccountRun {
                    account: label,
                    listing_error: Some(e.to_string()),
                    results: Vec::new(),
                },
            };
            accounts.push(run);
        }

        let report = RunReport {
            started_at,
            accounts,
        };
        tracing::info!(
            "Renewal run finished: {} succeeded, {} skipped, {} failed, {} account(s) unreachable",
            report.count(RenewalStatus::Success),
            report.count(RenewalStatus::Skipped),
            report.count(RenewalStatus::Failed),
            report.failed_listings()
        );
        report
    }
}
