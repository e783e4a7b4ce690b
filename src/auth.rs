//! Authentication seam.
//!
//! DNS Services authenticates every request with an IAM bearer token. Token
//! acquisition and refresh belong to an external token manager; this crate
//! only defines the seam it plugs into plus a static-token implementation for
//! callers that already hold a valid token.

use async_trait::async_trait;
use thiserror::Error;

/// Error produced while resolving a bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The configured credential is unusable (empty token, rejected key).
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// The token source failed transiently (network, token service outage).
    #[error("token source unavailable: {0}")]
    Unavailable(String),
}

/// Source of bearer tokens for outgoing requests.
///
/// The client calls [`bearer_token`](Self::bearer_token) once per request, so
/// implementations backed by a token service should cache internally.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns a token valid for the next request, without the `Bearer ` prefix.
    async fn bearer_token(&self) -> Result<String, AuthError>;
}

/// Authenticator that replays a fixed bearer token.
///
/// Suitable for short-lived tools and tests; long-running callers should
/// implement [`Authenticator`] over a refreshing token manager instead.
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    /// Creates an authenticator from a raw token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredential`] if the token is empty or
    /// carries a `Bearer ` prefix (the client adds the scheme itself).
    pub fn new(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AuthError::InvalidCredential(
                "bearer token must not be empty".to_string(),
            ));
        }
        if token.trim_start().to_ascii_lowercase().starts_with("bearer ") {
            return Err(AuthError::InvalidCredential(
                "token must be passed without the 'Bearer ' scheme prefix".to_string(),
            ));
        }
        Ok(Self { token })
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    async fn bearer_token(&self) -> Result<String, AuthError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_token_replayed() {
        let auth = BearerTokenAuthenticator::new("abc123").unwrap();
        assert_eq!(auth.bearer_token().await.unwrap(), "abc123");
        assert_eq!(auth.bearer_token().await.unwrap(), "abc123");
    }

    #[test]
    fn empty_token_rejected() {
        let res = BearerTokenAuthenticator::new("   ");
        assert!(matches!(res, Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn bearer_prefix_rejected() {
        let res = BearerTokenAuthenticator::new("Bearer abc123");
        assert!(matches!(res, Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn error_display() {
        let e = AuthError::Unavailable("iam timeout".to_string());
        assert_eq!(e.to_string(), "token source unavailable: iam timeout");
    }
}
