//! 测试辅助模块
//!
//! 提供 mock Provider 和便捷的测试工厂方法。

use std::collections::HashMap;

use async_trait::async_trait;
use domain_renewer_provider::{
    Account, Domain, DomainId, ProviderError, RenewalProvider, RenewalReceipt, Result,
};
use tokio::sync::Mutex;

// ===== MockRenewalProvider =====

/// 记录调用顺序的 mock Provider。
///
/// 未配置的账户返回空域名列表，未配置的域名续期成功。
pub struct MockRenewalProvider {
    /// 按 API key 配置的 list 结果
    listings: HashMap<String, Result<Vec<Domain>>>,
    /// 按域名配置的 renew 失败
    renew_errors: HashMap<String, ProviderError>,
    /// 调用日志，例如 `list:k1`、`renew:k1:a.example.com`
    calls: Mutex<Vec<String>>,
}

impl MockRenewalProvider {
    pub fn new() -> Self {
        Self {
            listings: HashMap::new(),
            renew_errors: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_domains(mut self, key: &str, domains: Vec<Domain>) -> Self {
        self.listings.insert(key.to_string(), Ok(domains));
        self
    }

    pub fn with_list_error(mut self, key: &str, error: ProviderError) -> Self {
        self.listings.insert(key.to_string(), Err(error));
        self
    }

    pub fn with_renew_error(mut self, domain: &str, error: ProviderError) -> Self {
        self.renew_errors.insert(domain.to_string(), error);
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl RenewalProvider for MockRenewalProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_domains(&self, account: &Account) -> Result<Vec<Domain>> {
        self.calls.lock().await.push(format!("list:{}", account.key));
        self.listings
            .get(&account.key)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn renew_domain(&self, account: &Account, domain: &Domain) -> Result<RenewalReceipt> {
        self.calls
            .lock()
            .await
            .push(format!("renew:{}:{}", account.key, domain.name));
        if let Some(err) = self.renew_errors.get(&domain.name) {
            return Err(err.clone());
        }
        Ok(RenewalReceipt {
            domain: domain.name.clone(),
            new_expires_at: Some("2027-01-01 00:00:00".to_string()),
            message: None,
        })
    }
}

// ===== 工厂方法 =====

pub fn domain(id: u64, name: &str) -> Domain {
    Domain {
        id: Some(DomainId::Numeric(id)),
        name: name.to_string(),
        status: Some("active".to_string()),
        expires_at: None,
    }
}

pub fn domain_without_id(name: &str) -> Domain {
    Domain {
        id: None,
        name: name.to_string(),
        status: None,
        expires_at: None,
    }
}

pub fn auth_error() -> ProviderError {
    ProviderError::InvalidCredentials {
        provider: "mock".to_string(),
        raw_message: Some("Invalid API key".to_string()),
    }
}

pub fn not_due_error(domain: &str) -> ProviderError {
    ProviderError::NotRenewable {
        provider: "mock".to_string(),
        domain: domain.to_string(),
        raw_message: Some("Renewal is not yet available".to_string()),
    }
}

pub fn network_error() -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: "connection reset".to_string(),
    }
}
