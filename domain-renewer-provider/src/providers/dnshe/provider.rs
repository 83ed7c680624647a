//! DNSHE `RenewalProvider` trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::{ProviderError, Result};
use crate::providers::common::{join_domain, normalize_domain_name};
use crate::traits::{ErrorContext, ProviderErrorMapper, RenewalProvider};
use crate::types::{Account, Domain, RenewalReceipt};
use crate::utils::log_sanitizer::key_fingerprint;

use serde_json::Value;

use super::types::value_to_string;
use super::{
    DNSHE_ACTION_LIST, DNSHE_ACTION_RENEW, DnsheProvider, DnsheResponse, DnsheSubdomain,
    RenewData, RenewRequest, SubdomainList,
};

impl DnsheProvider {
    /// 将 DNSHE 子域名条目转换为 `Domain`
    /// 名称优先使用 `full_domain`，缺失时由 `subdomain` + `rootdomain` 拼接
    pub(crate) fn subdomain_to_domain(sub: &DnsheSubdomain) -> Domain {
        let id = sub.domain_id().filter(|id| !id.is_blank());
        let text = |v: &Option<Value>| v.as_ref().and_then(value_to_string).unwrap_or_default();

        let name = Some(normalize_domain_name(&text(&sub.full_domain)))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| join_domain(&text(&sub.subdomain), &text(&sub.rootdomain)));
        let name = if name.is_empty() {
            id.as_ref()
                .map_or_else(|| "<unnamed>".to_string(), |id| format!("<subdomain {id}>"))
        } else {
            name
        };

        Domain {
            id,
            name,
            status: sub.status.as_ref().and_then(value_to_string),
            expires_at: sub.expires_at.as_ref().and_then(value_to_string),
        }
    }

    /// 逐条转换列表条目；无法识别的条目保留为无 ID 的域名，由调用方跳过
    pub(crate) fn entry_to_domain(&self, position: usize, entry: Value) -> Domain {
        match serde_json::from_value::<DnsheSubdomain>(entry) {
            Ok(sub) => Self::subdomain_to_domain(&sub),
            Err(e) => {
                log::warn!(
                    "[{}] unreadable subdomain entry #{position}: {e}",
                    self.provider_name()
                );
                Domain {
                    id: None,
                    name: format!("<entry {position}>"),
                    status: None,
                    expires_at: None,
                }
            }
        }
    }

    /// `subdomains` 字段：数组或以 ID 为键的对象
    fn subdomain_entries(&self, subdomains: Option<Value>) -> Result<Vec<Value>> {
        match subdomains {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(entries)) => Ok(entries),
            Some(Value::Object(map)) => Ok(map.into_iter().map(|(_, entry)| entry).collect()),
            Some(other) => Err(self.parse_error(format!(
                "`subdomains` must be a list, got {other}"
            ))),
        }
    }
}

#[async_trait]
impl RenewalProvider for DnsheProvider {
    fn id(&self) -> &'static str {
        "dnshe"
    }

    async fn list_domains(&self, account: &Account) -> Result<Vec<Domain>> {
        let response: DnsheResponse<SubdomainList> = self
            .request::<_, ()>(
                Method::GET,
                DNSHE_ACTION_LIST,
                account,
                None,
                ErrorContext::default(),
            )
            .await?;

        let domains: Vec<Domain> = self
            .subdomain_entries(response.data.subdomains)?
            .into_iter()
            .enumerate()
            .map(|(i, entry)| self.entry_to_domain(i + 1, entry))
            .collect();

        log::debug!(
            "[{}] account {} has {} subdomain(s)",
            self.provider_name(),
            key_fingerprint(&account.key),
            domains.len()
        );
        Ok(domains)
    }

    async fn renew_domain(&self, account: &Account, domain: &Domain) -> Result<RenewalReceipt> {
        let Some(id) = domain.id.as_ref() else {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "subdomain_id".to_string(),
                detail: format!("'{}' was listed without an id", domain.name),
            });
        };

        let body = RenewRequest { subdomain_id: id };
        let response: DnsheResponse<RenewData> = self
            .request(
                Method::POST,
                DNSHE_ACTION_RENEW,
                account,
                Some(&body),
                ErrorContext::for_domain(&domain.name),
            )
            .await?;

        Ok(RenewalReceipt {
            domain: domain.name.clone(),
            new_expires_at: response.data.new_expires_at.as_ref().and_then(value_to_string),
            message: response.message(),
        })
    }
}
