//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use domain_renewer_provider::{Account, DnsheProvider};
use wiremock::MockServer;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Mock 服务上的 API 基础地址（与官方地址结构一致）
pub fn mock_api_base(server: &MockServer) -> String {
    format!("{}/index.php?m=domain_hub", server.uri())
}

/// 指向 Mock 服务的 Provider
pub fn mock_provider(server: &MockServer) -> Option<DnsheProvider> {
    DnsheProvider::builder()
        .api_base(mock_api_base(server))
        .build()
        .ok()
}

pub fn test_account() -> Account {
    Account::new("test-key-0001", "test-secret-0001")
}

/// 从环境变量读取真实账户（集成测试用）
pub fn live_account() -> Option<Account> {
    let key = env::var("DNSHE_API_KEY").ok()?;
    let secret = env::var("DNSHE_API_SECRET").ok()?;
    Some(Account::new(key, secret))
}
