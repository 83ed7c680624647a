//! DNSHE HTTP 请求方法

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::append_query;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::Account;
use crate::utils::log_sanitizer::{key_fingerprint, truncate_for_log};

use super::{DNSHE_ENDPOINT_SUBDOMAINS, DnsheProvider, DnsheResponse};

impl DnsheProvider {
    /// 拼接接口地址: `{api_base}&endpoint=..&action=..`
    pub(crate) fn endpoint_url(&self, endpoint: &str, action: &str) -> String {
        append_query(
            &self.api_base,
            &[("endpoint", endpoint), ("action", action)],
        )
    }

    /// 执行 DNSHE API 请求
    ///
    /// 返回 `success: true` 的响应信封；`success: false` 经错误映射后返回 `Err`。
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        action: &str,
        account: &Account,
        body: Option<&B>,
        ctx: ErrorContext,
    ) -> Result<DnsheResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        // 1. 构建请求（凭证只出现在请求头中）
        let url = self.endpoint_url(DNSHE_ENDPOINT_SUBDOMAINS, action);
        log::debug!(
            "[{}] account {} -> {DNSHE_ENDPOINT_SUBDOMAINS}/{action}",
            self.provider_name(),
            key_fingerprint(&account.key)
        );

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header("X-API-Key", &account.key)
            .header("X-API-Secret", &account.secret);
        if let Some(body) = body {
            request = request.json(body);
        }

        // 2. 发送请求（单次，不重试）
        let (status, response_text) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            method.as_str(),
            &format!("{DNSHE_ENDPOINT_SUBDOMAINS}/{action}"),
        )
        .await?;

        // 3. 解析响应；非 2xx 且无法解析时按 HTTP 状态码映射
        let response: DnsheResponse<T> =
            match HttpUtils::parse_json(&response_text, self.provider_name()) {
                Ok(response) => response,
                Err(_) if !(200..300).contains(&status) => {
                    return Err(self.map_error(
                        RawApiError::with_code(
                            status.to_string(),
                            format!("HTTP {status}: {}", truncate_for_log(&response_text)),
                        ),
                        ctx,
                    ));
                }
                Err(e) => return Err(e),
            };

        // 4. 处理业务错误
        if !response.success {
            let raw = match response.error_code() {
                Some(code) => RawApiError::with_code(code, response.error_text()),
                None => RawApiError::new(response.error_text()),
            };
            log::warn!(
                "[{}] API error on {action}: {}",
                self.provider_name(),
                raw.message
            );
            return Err(self.map_error(raw, ctx));
        }

        Ok(response)
    }
}
