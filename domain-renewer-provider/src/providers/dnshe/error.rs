//! DNSHE error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::DnsheProvider;

/// Message fragments meaning the renewal window has not opened yet.
const NOT_DUE_HINTS: &[&str] = &[
    "not yet",
    "not due",
    "too early",
    "not eligible",
    "not renewable",
    "no need",
    "未到",
    "无需续期",
    "不需要续期",
    "暂不能续期",
    "尚未到期",
];

/// Message fragments meaning the key/secret pair was rejected.
const AUTH_HINTS: &[&str] = &[
    "invalid api key",
    "invalid api secret",
    "invalid key",
    "invalid secret",
    "unauthorized",
    "authentication",
    "认证失败",
    "密钥错误",
    "api key 无效",
];

const NOT_FOUND_HINTS: &[&str] = &["not found", "does not exist", "不存在"];

const PERMISSION_HINTS: &[&str] = &["forbidden", "permission denied", "无权"];

const RATE_LIMIT_HINTS: &[&str] = &["too many requests", "rate limit", "频繁"];

fn contains_any(message: &str, hints: &[&str]) -> bool {
    hints.iter().any(|hint| message.contains(hint))
}

/// DNSHE error mapping
///
/// The API signals failures with `success: false` plus a free-form message and,
/// on some endpoints, an error code. Known codes are matched first, then the
/// message text.
impl ProviderErrorMapper for DnsheProvider {
    fn provider_name(&self) -> &'static str {
        "dnshe"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let code = raw.code.as_deref().map(str::to_ascii_lowercase);
        let message = raw.message.to_lowercase();

        match code.as_deref() {
            Some("401" | "unauthorized" | "invalid_api_key" | "invalid_credentials" | "auth_failed") => {
                return ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                };
            }
            Some("403" | "forbidden" | "permission_denied") => {
                return ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                };
            }
            Some("not_due" | "renewal_not_due" | "too_early" | "not_renewable") => {
                return ProviderError::NotRenewable {
                    provider: self.provider_name().to_string(),
                    domain: context.domain_or_unknown(),
                    raw_message: Some(raw.message),
                };
            }
            Some("404" | "not_found" | "subdomain_not_found") => {
                return ProviderError::DomainNotFound {
                    provider: self.provider_name().to_string(),
                    domain: context.domain_or_unknown(),
                    raw_message: Some(raw.message),
                };
            }
            Some("429" | "rate_limited") => {
                return ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                };
            }
            _ => {}
        }

        if contains_any(&message, NOT_DUE_HINTS) {
            ProviderError::NotRenewable {
                provider: self.provider_name().to_string(),
                domain: context.domain_or_unknown(),
                raw_message: Some(raw.message),
            }
        } else if contains_any(&message, AUTH_HINTS) {
            ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            }
        } else if contains_any(&message, PERMISSION_HINTS) {
            ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            }
        } else if contains_any(&message, NOT_FOUND_HINTS) {
            ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain_or_unknown(),
                raw_message: Some(raw.message),
            }
        } else if contains_any(&message, RATE_LIMIT_HINTS) {
            ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            }
        } else {
            self.unknown_error(raw)
        }
    }
}
