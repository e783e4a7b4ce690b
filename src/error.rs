use serde::{Deserialize, Serialize};

/// Unified error type for all DNS Services operations.
///
/// All variants are serializable for structured error reporting. API-level
/// variants carry the raw message returned by the service when one was
/// available, so callers can surface it for inspection.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// The built-in HTTP layer automatically retries these with exponential backoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum DnsSvcsError {
    /// A required path or query parameter was empty.
    ///
    /// Raised locally, before any network I/O happens.
    MissingParameter {
        /// Name of the missing parameter.
        param: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    ///
    /// This is a transient error and is automatically retried.
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// This is a transient error and is automatically retried.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    ///
    /// This is a transient error; the request should succeed after waiting.
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The bearer token is invalid or expired (HTTP 401).
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated identity lacks permission for the operation (HTTP 403).
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested resource does not exist (HTTP 404).
    NotFound {
        /// Path of the resource that was not found.
        resource: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The request conflicts with the current remote state (HTTP 409),
    /// e.g. creating a zone whose name already exists in the instance.
    Conflict {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The request body or parameters were rejected by the API (HTTP 400/422).
    InvalidRequest {
        /// Description of what the API rejected.
        detail: String,
    },

    /// An unrecognized non-2xx response from the API.
    ///
    /// This is the catch-all when the response does not map to a specific
    /// variant; it keeps the raw body so callers can inspect it.
    ApiError {
        /// HTTP status code of the response.
        status: u16,
        /// Raw error code from the API body, if one could be decoded.
        raw_code: Option<String>,
        /// Raw error message or body text.
        raw_message: String,
    },

    /// Failed to parse the API's response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl DnsSvcsError {
    /// Whether this error reflects expected behavior (caller input, absent
    /// resources) rather than an infrastructure failure, for log leveling.
    ///
    /// Returns `true` for `warn`-level errors, `false` for `error`-level.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. }
                | Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::NotFound { .. }
                | Self::Conflict { .. }
                | Self::InvalidRequest { .. }
        )
    }
}

impl std::fmt::Display for DnsSvcsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParameter { param } => {
                write!(f, "Missing required parameter '{param}'")
            }
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Permission denied: {msg}")
                } else {
                    write!(f, "Permission denied")
                }
            }
            Self::NotFound {
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Resource '{resource}' not found: {msg}")
                } else {
                    write!(f, "Resource '{resource}' not found")
                }
            }
            Self::Conflict { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Conflict: {msg}")
                } else {
                    write!(f, "Conflict")
                }
            }
            Self::InvalidRequest { detail } => {
                write!(f, "Invalid request: {detail}")
            }
            Self::ApiError {
                status,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "API error {status} ({code}): {raw_message}")
                } else {
                    write!(f, "API error {status}: {raw_message}")
                }
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for DnsSvcsError {}

/// Convenience type alias for `Result<T, DnsSvcsError>`.
pub type Result<T> = std::result::Result<T, DnsSvcsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_parameter() {
        let e = DnsSvcsError::MissingParameter {
            param: "dnszone_id".to_string(),
        };
        assert_eq!(e.to_string(), "Missing required parameter 'dnszone_id'");
    }

    #[test]
    fn display_network_error() {
        let e = DnsSvcsError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = DnsSvcsError::RateLimited {
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Rate limited (retry after 30s)");
    }

    #[test]
    fn display_rate_limited_without_retry() {
        let e = DnsSvcsError::RateLimited {
            retry_after: None,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Rate limited");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = DnsSvcsError::InvalidCredentials {
            raw_message: Some("token expired".to_string()),
        };
        assert_eq!(e.to_string(), "Invalid credentials: token expired");
    }

    #[test]
    fn display_not_found() {
        let e = DnsSvcsError::NotFound {
            resource: "dnszones/example.com:1234".to_string(),
            raw_message: None,
        };
        assert_eq!(
            e.to_string(),
            "Resource 'dnszones/example.com:1234' not found"
        );
    }

    #[test]
    fn display_api_error_with_code() {
        let e = DnsSvcsError::ApiError {
            status: 500,
            raw_code: Some("internal_error".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "API error 500 (internal_error): something broke"
        );
    }

    #[test]
    fn display_api_error_without_code() {
        let e = DnsSvcsError::ApiError {
            status: 500,
            raw_code: None,
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "API error 500: something broke");
    }

    #[test]
    fn serialize_uses_code_tag() {
        let e = DnsSvcsError::RateLimited {
            retry_after: Some(60),
            raw_message: Some("too many requests".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RateLimited\""));
        assert!(json.contains("\"retry_after\":60"));
    }

    #[test]
    fn deserialize_round_trip() {
        let original = DnsSvcsError::NotFound {
            resource: "monitors/abc".to_string(),
            raw_message: Some("not found".to_string()),
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: DnsSvcsError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), original.to_string());
    }

    #[test]
    fn expected_variants() {
        assert!(
            DnsSvcsError::MissingParameter {
                param: "x".into()
            }
            .is_expected()
        );
        assert!(
            DnsSvcsError::NotFound {
                resource: "x".into(),
                raw_message: None
            }
            .is_expected()
        );
        assert!(
            DnsSvcsError::Conflict { raw_message: None }.is_expected()
        );
        assert!(
            !DnsSvcsError::NetworkError {
                detail: "x".into()
            }
            .is_expected()
        );
        assert!(
            !DnsSvcsError::ParseError {
                detail: "x".into()
            }
            .is_expected()
        );
    }
}
