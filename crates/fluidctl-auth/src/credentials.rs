//! Bearer credential resolution.

use tracing::debug;

use crate::claims;
use crate::config::AuthConfig;
use crate::error::Result;
use crate::flow::LoginFlow;
use crate::store::TokenStore;

/// Owns the bearer token lifecycle: cached reuse, expiry checking,
/// interactive login, and persistence.
pub struct CredentialManager {
    config: AuthConfig,
    store: TokenStore,
}

impl CredentialManager {
    /// Manager over the default token store and the fixed issuer endpoints.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config: AuthConfig::default(),
            store: TokenStore::new()?,
        })
    }

    /// Manager with explicit configuration and store.
    pub fn with_config(config: AuthConfig, store: TokenStore) -> Self {
        Self { config, store }
    }

    /// Return a usable bearer token.
    ///
    /// Resolution order, first success wins:
    /// 1. A non-empty `explicit_token` is returned unchanged, with no
    ///    validation, expiry check or persistence.
    /// 2. The cached token is returned while its expiry claim is still in
    ///    the future. A readable-but-malformed cached token is a hard error
    ///    rather than a silent re-login, so a corrupted store surfaces.
    /// 3. Otherwise the interactive login flow runs and its token is
    ///    returned.
    pub async fn obtain(&self, explicit_token: Option<&str>) -> Result<String> {
        if let Some(token) = explicit_token
            && !token.is_empty()
        {
            return Ok(token.to_string());
        }

        if let Some(token) = self.store.read()? {
            let expiry = claims::token_expiry(&token)?;
            if !claims::is_expired(expiry) {
                debug!(%expiry, "using cached token");
                return Ok(token);
            }
            debug!(%expiry, "cached token expired, starting login");
        }

        LoginFlow::new(&self.config, &self.store)?.authenticate().await
    }
}
