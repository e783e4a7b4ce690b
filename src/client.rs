//! The DNS Services client and its request helpers.
//!
//! Every operation module builds a path, picks a verb helper, and decodes the
//! response; the shared concerns (auth header, correlation id, error mapping)
//! live here.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthError, Authenticator};
use crate::error::{DnsSvcsError, Result};
use crate::http::HttpUtils;

/// Production endpoint for the DNS Services API.
pub const DEFAULT_BASE_URL: &str = "https://api.dns-svcs.cloud.ibm.com/v1";

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default number of retries for transient failures.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Client configuration knobs.
///
/// Timeouts and retries are forwarded to the shared HTTP layer; the client
/// itself adds no behavior around them.
#[derive(Debug, Clone)]
pub struct Config {
    /// API endpoint, without a trailing slash.
    pub base_url: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Retries for transient failures (0 disables retrying).
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Client for the DNS Services REST API.
///
/// Holds one connection pool and one [`Authenticator`]; neither is mutated
/// after construction, so the client can be shared behind `Arc` across tasks.
pub struct DnsSvcsClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) authenticator: Arc<dyn Authenticator>,
    pub(crate) max_retries: u32,
}

impl DnsSvcsClient {
    /// Creates a client against the production endpoint with default timeouts.
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self::with_config(authenticator, Config::default())
    }

    /// Creates a client with explicit configuration.
    pub fn with_config(authenticator: Arc<dyn Authenticator>, config: Config) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authenticator,
            max_retries: config.max_retries,
        }
    }

    /// Builds a request with auth and correlation headers applied.
    async fn prepare(&self, method: Method, path: &str) -> Result<(RequestBuilder, String)> {
        let token = self
            .authenticator
            .bearer_token()
            .await
            .map_err(map_auth_error)?;
        let url = format!("{}{path}", self.base_url);
        let correlation_id = Uuid::new_v4().to_string();
        log::debug!("X-Correlation-Id: {correlation_id}");
        let builder = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {token}"))
            .header("X-Correlation-Id", correlation_id);
        Ok((builder, url))
    }

    /// Executes the request, triages the status, returns the success body.
    async fn run(&self, builder: RequestBuilder, method: &str, url: &str) -> Result<String> {
        let (status, text) =
            HttpUtils::execute_request_with_retry(builder, method, url, self.max_retries).await?;
        if !(200..300).contains(&status) {
            let err = map_api_error(status, &text, url);
            if err.is_expected() {
                log::warn!("{method} {url} failed: {err}");
            } else {
                log::error!("{method} {url} failed: {err}");
            }
            return Err(err);
        }
        Ok(text)
    }

    /// GET returning a decoded JSON body.
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T> {
        let (builder, url) = self.prepare(Method::GET, path).await?;
        let text = self.run(builder, "GET", &url).await?;
        HttpUtils::parse_json(&text)
    }

    /// GET returning the raw response text (zone-file export).
    pub(crate) async fn get_text(&self, path: &str) -> Result<String> {
        let (builder, url) = self.prepare(Method::GET, path).await?;
        let builder = builder.header("Accept", "text/plain; charset=utf-8");
        self.run(builder, "GET", &url).await
    }

    /// POST with a JSON body, returning a decoded JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize,
    {
        self.send_json(Method::POST, path, body).await
    }

    /// PUT with a JSON body, returning a decoded JSON body.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize,
    {
        self.send_json(Method::PUT, path, body).await
    }

    /// PATCH with a JSON body, returning a decoded JSON body.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize,
    {
        self.send_json(Method::PATCH, path, body).await
    }

    /// DELETE expecting an empty success body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let (builder, url) = self.prepare(Method::DELETE, path).await?;
        self.run(builder, "DELETE", &url).await?;
        Ok(())
    }

    /// DELETE returning a decoded JSON body (used where the API answers 202
    /// with the resource in a transitional state).
    pub(crate) async fn delete_returning<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T> {
        let (builder, url) = self.prepare(Method::DELETE, path).await?;
        let text = self.run(builder, "DELETE", &url).await?;
        HttpUtils::parse_json(&text)
    }

    /// POST a multipart form with one `file` part (zone-file import).
    ///
    /// Multipart bodies cannot be cloned, so the shared layer performs a
    /// single attempt regardless of the retry setting.
    pub(crate) async fn post_file<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        file: Vec<u8>,
        filename: &str,
    ) -> Result<T> {
        let (builder, url) = self.prepare(Method::POST, path).await?;
        let part = reqwest::multipart::Part::bytes(file)
            .file_name(filename.to_string())
            .mime_str("text/plain; charset=utf-8")
            .map_err(|e| DnsSvcsError::SerializationError {
                detail: e.to_string(),
            })?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let builder = builder.multipart(form);
        let text = self.run(builder, "POST", &url).await?;
        HttpUtils::parse_json(&text)
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize,
    {
        let payload =
            serde_json::to_string(body).map_err(|e| DnsSvcsError::SerializationError {
                detail: e.to_string(),
            })?;
        log::debug!(
            "Request Body: {}",
            crate::utils::log_sanitizer::truncate_for_log(&payload)
        );
        let method_name = method.as_str().to_string();
        let (builder, url) = self.prepare(method, path).await?;
        let builder = builder
            .header("Content-Type", "application/json")
            .body(payload);
        let text = self.run(builder, &method_name, &url).await?;
        HttpUtils::parse_json(&text)
    }
}

/// Structured error body the API returns for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    errors: Option<Vec<ApiErrorDetail>>,
    // Some gateway-level errors use a flat code/message pair instead.
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    code: Option<String>,
    message: Option<String>,
}

/// Maps a non-2xx response to a structured error.
///
/// Decodes the API's `{"errors":[{"code","message"}]}` body when possible and
/// falls back to the raw text otherwise, so callers always get something to
/// inspect.
pub(crate) fn map_api_error(status: u16, body: &str, resource: &str) -> DnsSvcsError {
    let (code, message) = decode_error_body(body);
    let raw_message = message.clone().or_else(|| {
        if body.is_empty() {
            None
        } else {
            Some(body.to_string())
        }
    });

    match status {
        400 | 422 => DnsSvcsError::InvalidRequest {
            detail: raw_message.unwrap_or_else(|| format!("HTTP {status}")),
        },
        401 => DnsSvcsError::InvalidCredentials { raw_message },
        403 => DnsSvcsError::PermissionDenied { raw_message },
        404 => DnsSvcsError::NotFound {
            resource: resource.to_string(),
            raw_message,
        },
        409 => DnsSvcsError::Conflict { raw_message },
        _ => DnsSvcsError::ApiError {
            status,
            raw_code: code,
            raw_message: raw_message.unwrap_or_else(|| format!("HTTP {status}")),
        },
    }
}

fn decode_error_body(body: &str) -> (Option<String>, Option<String>) {
    let Ok(decoded) = serde_json::from_str::<ApiErrorResponse>(body) else {
        return (None, None);
    };
    if let Some(first) = decoded.errors.as_ref().and_then(|e| e.first()) {
        return (first.code.clone(), first.message.clone());
    }
    (decoded.code, decoded.message)
}

fn map_auth_error(err: AuthError) -> DnsSvcsError {
    match err {
        AuthError::InvalidCredential(detail) => DnsSvcsError::InvalidCredentials {
            raw_message: Some(detail),
        },
        AuthError::Unavailable(detail) => DnsSvcsError::NetworkError { detail },
    }
}

/// Validates that a required path/query parameter is non-empty.
///
/// All operations call this before building the request, so bad input fails
/// locally without touching the network.
pub(crate) fn require_param(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DnsSvcsError::MissingParameter {
            param: name.to_string(),
        });
    }
    Ok(())
}

/// Percent-encodes a caller-supplied path segment.
pub(crate) fn enc(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
