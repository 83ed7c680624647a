//! DNSHE 免费域名 Provider

mod error;
mod http;
mod provider;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, normalize_api_base};
use crate::types::ProviderOptions;

pub(crate) use types::{DnsheResponse, DnsheSubdomain, RenewData, RenewRequest, SubdomainList};

/// DNSHE 官方 API 地址（已带 `m=domain_hub` 查询参数）
pub const DEFAULT_DNSHE_API_BASE: &str = "https://api005.dnshe.com/index.php?m=domain_hub";
pub(crate) const DNSHE_ENDPOINT_SUBDOMAINS: &str = "subdomains";
pub(crate) const DNSHE_ACTION_LIST: &str = "list";
pub(crate) const DNSHE_ACTION_RENEW: &str = "renew";

/// DNSHE Provider
#[derive(Debug)]
pub struct DnsheProvider {
    pub(crate) client: Client,
    pub(crate) api_base: String,
}

/// DNSHE Provider Builder
pub struct DnsheProviderBuilder {
    options: ProviderOptions,
}

impl DnsheProviderBuilder {
    fn new(options: ProviderOptions) -> Self {
        Self { options }
    }

    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.options.api_base = Some(api_base.into());
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.options.connect_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.options.request_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<DnsheProvider> {
        let api_base = normalize_api_base(
            "dnshe",
            self.options
                .api_base
                .as_deref()
                .unwrap_or(DEFAULT_DNSHE_API_BASE),
        )?;
        Ok(DnsheProvider {
            client: create_http_client("dnshe", &self.options)?,
            api_base,
        })
    }
}

impl DnsheProvider {
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> DnsheProviderBuilder {
        DnsheProviderBuilder::new(ProviderOptions::default())
    }

    pub fn with_options(options: ProviderOptions) -> Result<Self> {
        DnsheProviderBuilder::new(options).build()
    }

    /// Base URL requests are built from.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}
