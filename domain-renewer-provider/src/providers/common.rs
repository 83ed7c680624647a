//! Provider 公共工具函数

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::ProviderOptions;

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider: &str, options: &ProviderOptions) -> Result<Client> {
    Client::builder()
        .connect_timeout(options.connect_timeout)
        .timeout(options.request_timeout)
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ URL 处理 ============

/// 校验并规范化 API 基础地址（去掉末尾的 `&`，必须是 http/https）
pub fn normalize_api_base(provider: &str, api_base: &str) -> Result<String> {
    let trimmed = api_base.trim().trim_end_matches('&');
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ProviderError::InvalidParameter {
            provider: provider.to_string(),
            param: "api_base".to_string(),
            detail: format!("must be an http(s) URL, got '{trimmed}'"),
        });
    }
    Ok(trimmed.to_string())
}

/// 在已有查询串的 URL 后追加参数
/// 如: "https://h/index.php?m=x" + [("a", "b")] -> "https://h/index.php?m=x&a=b"
pub fn append_query(base: &str, params: &[(&str, &str)]) -> String {
    let mut url = base.to_string();
    for (name, value) in params {
        let sep = if url.contains('?') { '&' } else { '?' };
        url.push(sep);
        url.push_str(&urlencoding::encode(name));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

// ============ 域名名称处理 ============

/// 去掉域名首尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim().trim_matches('.').to_string()
}

/// 拼接子域名前缀与根域名
/// 如: "blog" + "example.com" -> "blog.example.com"
/// 如: "@" + "example.com" -> "example.com"
pub fn join_domain(label: &str, root: &str) -> String {
    let label = normalize_domain_name(label);
    let root = normalize_domain_name(root);

    if label.is_empty() || label == "@" {
        root
    } else if root.is_empty() {
        label
    } else {
        format!("{label}.{root}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_query_uses_ampersand_after_existing_query() {
        let url = append_query(
            "https://api.example.com/index.php?m=domain_hub",
            &[("endpoint", "subdomains"), ("action", "list")],
        );
        assert_eq!(
            url,
            "https://api.example.com/index.php?m=domain_hub&endpoint=subdomains&action=list"
        );
    }

    #[test]
    fn append_query_starts_query_when_missing() {
        let url = append_query("http://localhost/api", &[("a", "b c")]);
        assert_eq!(url, "http://localhost/api?a=b%20c");
    }

    #[test]
    fn normalize_api_base_rejects_non_http() {
        let res = normalize_api_base("test", "ftp://example.com");
        assert!(
            matches!(&res, Err(ProviderError::InvalidParameter { param, .. }) if param == "api_base"),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn normalize_api_base_trims_trailing_separator() {
        let res = normalize_api_base("test", " https://h/index.php?m=x& ");
        assert_eq!(res.ok().as_deref(), Some("https://h/index.php?m=x"));
    }

    #[test]
    fn join_domain_variants() {
        assert_eq!(join_domain("blog", "example.com."), "blog.example.com");
        assert_eq!(join_domain("@", "example.com"), "example.com");
        assert_eq!(join_domain("", "example.com"), "example.com");
        assert_eq!(join_domain("blog", ""), "blog");
    }
}
