use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{Account, Domain, RenewalReceipt};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 域名（用于 `NotRenewable` / `DomainNotFound` 等错误）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
        }
    }

    pub fn domain_or_unknown(&self) -> String {
        self.domain
            .clone()
            .unwrap_or_else(|| "<unknown>".to_string())
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// 域名注册商 Trait
///
/// 凭证按账户传入，同一个 Provider 实例（共享一个 HTTP Client）可服务多个账户。
#[async_trait]
pub trait RenewalProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取账户下的全部域名
    async fn list_domains(&self, account: &Account) -> Result<Vec<Domain>>;

    /// 续期单个域名
    ///
    /// 注册商拒绝续期（未到续期时间）时返回 [`ProviderError::NotRenewable`]。
    async fn renew_domain(&self, account: &Account, domain: &Domain) -> Result<RenewalReceipt>;
}
