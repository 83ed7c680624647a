//! Generic HTTP client tools
//!
//! Provide reusable HTTP request processing logic so each provider only
//! builds its own `RequestBuilder` (URL, auth headers, body).
//!
//! # design principles
//! - **Provider builds the request** - authentication schemes differ between registrars
//! - **Unified HTTP processing flow** - sending requests, logging, transport-level status mapping
//! - **Single attempt** - a failed request is reported, never replayed

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// Unified processing: sending requests, logging, error handling
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url_or_action` - URL or Action name (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - returns status code and response text
    /// * `Err(ProviderError::NetworkError | Timeout)` - transport failure or gateway error
    /// * `Err(ProviderError::InvalidCredentials)` - HTTP 401 / 403
    /// * `Err(ProviderError::RateLimited)` - HTTP 429
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        // Send request
        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        // Returns InvalidCredentials for HTTP 401/403
        if matches!(status_code, 401 | 403) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Authentication rejected (HTTP {status_code})");
            return Err(ProviderError::InvalidCredentials {
                provider: provider_name.to_string(),
                raw_message: Some(format!("HTTP {status_code}: {}", truncate_for_log(&body))),
            });
        }

        // Returns RateLimited error for HTTP 429
        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        // Return NetworkError for 502/503/504
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        // Read response body
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Arguments
    /// * `response_text` - JSON text
    /// * `provider_name` - Provider name (used for error messages)
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run_against(template: ResponseTemplate) -> Result<(u16, String), ProviderError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(template)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let request = client.get(format!("{}/probe", server.uri()));
        HttpUtils::execute_request(request, "test", "GET", "/probe").await
    }

    // ---- execute_request ----

    #[tokio::test]
    async fn ok_returns_status_and_body() {
        let result = run_against(ResponseTemplate::new(200).set_body_string("{}")).await;
        assert!(
            matches!(&result, Ok((200, body)) if body == "{}"),
            "unexpected result: {result:?}"
        );
    }

    #[tokio::test]
    async fn client_errors_are_returned_for_body_inspection() {
        let result = run_against(ResponseTemplate::new(400).set_body_string("bad")).await;
        assert!(
            matches!(&result, Ok((400, body)) if body == "bad"),
            "unexpected result: {result:?}"
        );
    }

    #[tokio::test]
    async fn unauthorized_maps_to_invalid_credentials() {
        let result = run_against(ResponseTemplate::new(401).set_body_string("nope")).await;
        assert!(
            matches!(&result, Err(ProviderError::InvalidCredentials { .. })),
            "unexpected result: {result:?}"
        );
    }

    #[tokio::test]
    async fn too_many_requests_carries_retry_after() {
        let result = run_against(
            ResponseTemplate::new(429).insert_header("retry-after", "12"),
        )
        .await;
        assert!(
            matches!(
                &result,
                Err(ProviderError::RateLimited {
                    retry_after: Some(12),
                    ..
                })
            ),
            "unexpected result: {result:?}"
        );
    }

    #[tokio::test]
    async fn bad_gateway_maps_to_network_error() {
        let result = run_against(ResponseTemplate::new(502)).await;
        assert!(
            matches!(&result, Err(ProviderError::NetworkError { .. })),
            "unexpected result: {result:?}"
        );
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_error() {
        let client = reqwest::Client::new();
        // Port 9 (discard) is not served in test environments.
        let request = client.get("http://127.0.0.1:9/unreachable");
        let result = HttpUtils::execute_request(request, "test", "GET", "/unreachable").await;
        assert!(
            matches!(
                &result,
                Err(ProviderError::NetworkError { .. } | ProviderError::Timeout { .. })
            ),
            "unexpected result: {result:?}"
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
