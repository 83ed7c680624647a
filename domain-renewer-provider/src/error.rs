use serde::{Deserialize, Serialize};

/// Unified error type for all registrar provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Transient Errors
///
/// The following variants represent transient failures:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// Requests are never retried by this crate; a transient error is reported to the
/// caller exactly like any other failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provided API key/secret pair is invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The registrar refused the renewal because the domain is not eligible yet.
    ///
    /// This is an expected outcome of a scheduled run, not a failure.
    NotRenewable {
        /// Provider that produced the error.
        provider: String,
        /// Domain that was not renewed.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified domain was not found under the account.
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Domain name that was not found.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated account lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// A request parameter or provider option is invalid.
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（凭证错误、域名未到续期时间等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::NotRenewable { .. }
                | Self::DomainNotFound { .. }
                | Self::PermissionDenied { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Original message from the provider API, falling back to the display text.
    pub fn raw_message(&self) -> String {
        match self {
            Self::InvalidCredentials {
                raw_message: Some(msg),
                ..
            }
            | Self::NotRenewable {
                raw_message: Some(msg),
                ..
            }
            | Self::DomainNotFound {
                raw_message: Some(msg),
                ..
            }
            | Self::PermissionDenied {
                raw_message: Some(msg),
                ..
            }
            | Self::Unknown {
                raw_message: msg, ..
            } => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::NotRenewable {
                provider,
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Domain '{domain}' is not renewable yet: {msg}")
                } else {
                    write!(f, "[{provider}] Domain '{domain}' is not renewable yet")
                }
            }
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Domain '{domain}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Domain '{domain}' not found")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "dnshe".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[dnshe] Network error: connection refused");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "dnshe".to_string(),
            raw_message: Some("bad key".to_string()),
        };
        assert_eq!(e.to_string(), "[dnshe] Invalid credentials: bad key");
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "dnshe".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[dnshe] Invalid credentials");
    }

    #[test]
    fn display_not_renewable() {
        let e = ProviderError::NotRenewable {
            provider: "dnshe".to_string(),
            domain: "a.example.com".to_string(),
            raw_message: Some("too early".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[dnshe] Domain 'a.example.com' is not renewable yet: too early"
        );
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "dnshe".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[dnshe] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_unknown_is_raw_message() {
        let e = ProviderError::Unknown {
            provider: "dnshe".to_string(),
            raw_code: Some("E42".to_string()),
            raw_message: "something odd".to_string(),
        };
        assert_eq!(e.to_string(), "[dnshe] something odd");
    }

    #[test]
    fn expected_errors_are_business_outcomes() {
        let not_due = ProviderError::NotRenewable {
            provider: "dnshe".to_string(),
            domain: "x".to_string(),
            raw_message: None,
        };
        let timeout = ProviderError::Timeout {
            provider: "dnshe".to_string(),
            detail: "30s".to_string(),
        };
        assert!(not_due.is_expected());
        assert!(!timeout.is_expected());
    }

    #[test]
    fn raw_message_prefers_api_text() {
        let e = ProviderError::NotRenewable {
            provider: "dnshe".to_string(),
            domain: "x".to_string(),
            raw_message: Some("not due".to_string()),
        };
        assert_eq!(e.raw_message(), "not due");

        let e = ProviderError::ParseError {
            provider: "dnshe".to_string(),
            detail: "eof".to_string(),
        };
        assert_eq!(e.raw_message(), "[dnshe] Parse error: eof");
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProviderError::Timeout {
            provider: "dnshe".to_string(),
            detail: "elapsed".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "Timeout");
        assert_eq!(json["provider"], "dnshe");
    }
}
