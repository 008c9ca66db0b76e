//! Bearer credentials for live calls.
//!
//! The dashboard signs users in with an external identity provider, which
//! hands back an ID token. That token travels as `Authorization: Bearer`
//! on backend calls; the backend checks it, this crate never does.

use crate::config::ClientConfig;
use crate::error::ApiError;
use std::sync::Arc;

/// Asked for a credential before every live request that does not carry
/// one already. `Ok(None)` sends no Authorization header.
#[async_trait::async_trait]
pub trait TokenSource: Send + Sync + 'static {
    async fn token(&self) -> Result<Option<String>, ApiError>;
}

/// Anonymous access. The demo backend serves reads without a token.
pub struct NoAuth;

#[async_trait::async_trait]
impl TokenSource for NoAuth {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}

/// ID token captured at sign-in, forwarded verbatim until the process
/// exits. Refresh is the identity provider's business.
pub struct IdToken(String);

impl IdToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait::async_trait]
impl TokenSource for IdToken {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(Some(self.0.clone()))
    }
}

/// `IdToken` when the config carries a non-blank one, `NoAuth` otherwise.
pub fn from_config(config: &ClientConfig) -> Arc<dyn TokenSource> {
    match config.id_token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => Arc::new(IdToken::new(token)),
        _ => Arc::new(NoAuth),
    }
}
