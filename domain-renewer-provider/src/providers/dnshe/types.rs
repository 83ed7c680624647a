//! DNSHE API 类型定义

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::DomainId;

/// DNSHE API 通用响应
///
/// 成功与失败共用同一个信封：`success` 标志 + 可选的 `message` / `error`，
/// 业务数据平铺在同一层。字段类型不固定，统一宽松解析。
#[derive(Debug, Deserialize)]
pub struct DnsheResponse<T> {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    /// 错误码，API 可能返回字符串或数字
    #[serde(default)]
    pub error_code: Option<Value>,
    /// 部分接口使用 `code` 作为错误码字段
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> DnsheResponse<T> {
    /// 错误码的字符串形式
    pub fn error_code(&self) -> Option<String> {
        self.error_code
            .as_ref()
            .or(self.code.as_ref())
            .and_then(value_to_string)
    }

    /// 接口返回的提示信息
    pub fn message(&self) -> Option<String> {
        self.message.as_ref().and_then(value_to_string)
    }

    /// 失败时展示的错误消息：优先 `message`，其次 `error`
    pub fn error_text(&self) -> String {
        self.message()
            .or_else(|| self.error.as_ref().and_then(value_to_string))
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// `subdomains/list` 响应数据
///
/// 条目保持原始 JSON，逐条转换，单个异常条目不影响其余条目。
#[derive(Debug, Deserialize)]
pub struct SubdomainList {
    #[serde(default)]
    pub subdomains: Option<Value>,
}

/// 子域名条目（所有字段按原始 JSON 值读取）
#[derive(Debug, Default, Deserialize)]
pub struct DnsheSubdomain {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub subdomain: Option<Value>,
    #[serde(default)]
    pub rootdomain: Option<Value>,
    #[serde(default)]
    pub full_domain: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    /// 到期时间，格式不固定（字符串或时间戳）
    #[serde(default)]
    pub expires_at: Option<Value>,
}

impl DnsheSubdomain {
    /// 子域名 ID：数字或字符串，其余类型视为缺失
    pub fn domain_id(&self) -> Option<DomainId> {
        match self.id.as_ref()? {
            Value::Number(n) => n.as_u64().map(DomainId::Numeric),
            Value::String(s) => Some(DomainId::Text(s.clone())),
            _ => None,
        }
    }
}

/// `subdomains/renew` 响应数据
#[derive(Debug, Deserialize)]
pub struct RenewData {
    #[serde(default)]
    pub new_expires_at: Option<Value>,
}

/// `subdomains/renew` 请求体
#[derive(Debug, Serialize)]
pub struct RenewRequest<'a> {
    pub subdomain_id: &'a DomainId,
}

/// 将不定类型的 JSON 值转为展示用字符串（null / 空串视为缺失）
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// `success` 标志：接受 `true` / `1` / `"true"` / `"1"`，其余一律视为失败
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1"),
        _ => false,
    })
}
