//! Log sanitization utilities
//!
//! Prevents sensitive data (API keys, secrets, oversized response bodies)
//! from being fully exposed in debug/error logs and generated reports.

use sha2::{Digest, Sha256};

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading key characters left visible by [`mask_key`].
const VISIBLE_KEY_CHARS: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask an API key, keeping only its first characters.
///
/// Keys too short to keep a prefix are masked entirely.
pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(VISIBLE_KEY_CHARS).collect();
    if key.chars().count() <= VISIBLE_KEY_CHARS * 2 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

/// Short stable fingerprint of a key (first 8 hex chars of its SHA-256).
///
/// Lets log lines from different runs be correlated without revealing the key.
pub fn key_fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    hex::encode(&digest[..4])
}
