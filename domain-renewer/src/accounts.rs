//! Account list parsing
//!
//! The account list arrives as one secret value holding a JSON array of
//! `{"key": "...", "secret": "..."}` objects. It is validated up front so a
//! bad secret aborts the run before any request is sent.

use std::fmt;

use domain_renewer_provider::log_sanitizer::{key_fingerprint, mask_key};
use domain_renewer_provider::Account;
use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

/// Parse and validate the account list.
///
/// Order and values are preserved exactly; duplicates are allowed.
pub fn load_accounts(raw: &str) -> ConfigResult<Vec<Account>> {
    // Error positions only: serde messages may quote the offending value.
    let value: Value = serde_json::from_str(raw).map_err(|e| ConfigError::InvalidJson {
        line: e.line(),
        column: e.column(),
    })?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => return Err(ConfigError::NotAnArray(json_kind(&other))),
    };
    if entries.is_empty() {
        return Err(ConfigError::EmptyAccountList);
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| parse_account(i + 1, entry))
        .collect()
}

fn parse_account(index: usize, entry: Value) -> ConfigResult<Account> {
    let account: Account =
        serde_json::from_value(entry).map_err(|_| ConfigError::InvalidAccount {
            index,
            reason: "expected an object with string fields `key` and `secret`".to_string(),
        })?;

    if account.key.trim().is_empty() {
        return Err(ConfigError::InvalidAccount {
            index,
            reason: "`key` must not be empty".to_string(),
        });
    }
    if account.secret.trim().is_empty() {
        return Err(ConfigError::InvalidAccount {
            index,
            reason: "`secret` must not be empty".to_string(),
        });
    }
    Ok(account)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Redacted account identity used in logs and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountLabel {
    /// 1-based position in the configured list.
    pub position: usize,
    /// Key with all but its first characters masked.
    pub masked_key: String,
    /// Short SHA-256 fingerprint of the key.
    pub fingerprint: String,
}

impl AccountLabel {
    pub fn new(position: usize, account: &Account) -> Self {
        Self {
            position,
            masked_key: mask_key(&account.key),
            fingerprint: key_fingerprint(&account.key),
        }
    }
}

impl fmt::Display for AccountLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account {} ({})", self.position, self.masked_key)
    }
}
