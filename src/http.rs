//! Shared HTTP request execution.
//!
//! Every operation in the client funnels through this module: sending the
//! request, logging, status triage, and JSON parsing live here so the
//! per-endpoint code stays a thin path-build/decode wrapper.
//!
//! Retry policy is owned here as well: transient failures (network errors,
//! timeouts, HTTP 429/502-504) are retried with exponential backoff; business
//! errors are returned to the caller untouched.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::DnsSvcsError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP utility function set.
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on success
    /// * `Err(DnsSvcsError::NetworkError | Timeout | RateLimited)` on transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), DnsSvcsError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DnsSvcsError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                DnsSvcsError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        // Extract Retry-After before consuming the response body
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(DnsSvcsError::RateLimited {
                retry_after,
                raw_message: Some(body),
            });
        }

        // 502/503/504 are retryable transport-level failures
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Server error (HTTP {status_code})");
            return Err(DnsSvcsError::NetworkError {
                detail: format!("HTTP {status_code}: {body}"),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| DnsSvcsError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body into `T`.
    pub fn parse_json<T>(response_text: &str) -> Result<T, DnsSvcsError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            DnsSvcsError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request with automatic retries.
    ///
    /// Only transient errors are retried; business errors (auth failure,
    /// missing resource, rejected request) return immediately.
    ///
    /// # Retry strategy
    /// - Exponential backoff: 100ms, 200ms, 400ms, 800ms, ... capped at 10s
    /// - `Retry-After` from a 429 is honored, capped at 30s
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), DnsSvcsError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use; clone per attempt
            let Some(req) = request_builder.try_clone() else {
                // Unclonable (streaming body), fall back to a single attempt
                log::warn!("Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, method_name, url).await;
            };

            match Self::execute_request(req, method_name, url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| DnsSvcsError::NetworkError {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Whether the error is worth retrying.
fn is_retryable(error: &DnsSvcsError) -> bool {
    matches!(
        error,
        DnsSvcsError::NetworkError { .. }
            | DnsSvcsError::Timeout { .. }
            | DnsSvcsError::RateLimited { .. }
    )
}

/// Delay before the next attempt.
///
/// Uses the server-provided `Retry-After` (capped at 30s) for rate limits,
/// exponential backoff otherwise.
fn retry_delay(error: &DnsSvcsError, attempt: u32) -> Duration {
    if let DnsSvcsError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Exponential backoff: 100ms, 200ms, 400ms, ... capped at 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // keep 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    let delay_ms = delay_ms.min(10_000);
    Duration::from_millis(delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DnsSvcsError;
    use std::time::Duration;

    // ---- is_retryable ----

    #[test]
    fn retryable_network_error() {
        let e = DnsSvcsError::NetworkError {
            detail: "err".into(),
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn retryable_timeout() {
        let e = DnsSvcsError::Timeout {
            detail: "err".into(),
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn retryable_rate_limited() {
        let e = DnsSvcsError::RateLimited {
            retry_after: None,
            raw_message: None,
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn not_retryable_invalid_credentials() {
        let e = DnsSvcsError::InvalidCredentials { raw_message: None };
        assert!(!is_retryable(&e));
    }

    #[test]
    fn not_retryable_not_found() {
        let e = DnsSvcsError::NotFound {
            resource: "dnszones/x".into(),
            raw_message: None,
        };
        assert!(!is_retryable(&e));
    }

    #[test]
    fn not_retryable_missing_parameter() {
        let e = DnsSvcsError::MissingParameter {
            param: "instance_id".into(),
        };
        assert!(!is_retryable(&e));
    }

    #[test]
    fn not_retryable_parse_error() {
        let e = DnsSvcsError::ParseError {
            detail: "err".into(),
        };
        assert!(!is_retryable(&e));
    }

    // ---- retry_delay / backoff_delay ----

    #[test]
    fn backoff_attempt_0() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
    }

    #[test]
    fn backoff_attempt_3() {
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // attempt 7: 100 * 2^7 = 12800ms, capped to 10000ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_honored() {
        let e = DnsSvcsError::RateLimited {
            retry_after: Some(5),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(5));
    }

    #[test]
    fn retry_after_capped_at_30s() {
        let e = DnsSvcsError::RateLimited {
            retry_after: Some(3600),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, DnsSvcsError> = HttpUtils::parse_json(r#"{"x":42}"#);
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
        let result: Result<Foo, DnsSvcsError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(DnsSvcsError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
