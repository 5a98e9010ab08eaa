//! Interactive browser login flow.

use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::config::AuthConfig;
use crate::error::{AuthError, Result};
use crate::listener::CallbackListener;
use crate::pkce::PkceExchange;
use crate::store::TokenStore;

/// A single interactive login attempt.
///
/// The PKCE material, the callback listener and the browser hand-off are all
/// owned by one `LoginFlow` value; nothing is shared between attempts. The
/// flow runs linearly: bind the listener, direct the browser at the issuer,
/// wait for the redirect, exchange the code, persist the token.
pub struct LoginFlow<'a> {
    config: &'a AuthConfig,
    store: &'a TokenStore,
    exchange: PkceExchange,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl<'a> LoginFlow<'a> {
    /// Create a flow with freshly generated PKCE material.
    pub fn new(config: &'a AuthConfig, store: &'a TokenStore) -> Result<Self> {
        Ok(Self {
            config,
            store,
            exchange: PkceExchange::generate()?,
        })
    }

    /// The issuer authorization URL for this attempt.
    pub fn authorization_url(&self) -> Url {
        let mut url =
            Url::parse(&self.config.auth_url).expect("authorization endpoint is a valid URL");
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_url)
            .append_pair("scope", &self.config.scopes)
            .append_pair("state", &self.exchange.state)
            .append_pair("code_challenge_method", "S256")
            .append_pair("code_challenge", &self.exchange.challenge)
            .append_pair("audience", &self.config.audience);
        url
    }

    /// Run the flow to completion and return the access token.
    ///
    /// The callback listener is bound before the browser opens so the
    /// redirect cannot race the bind; it is torn down once an outcome is
    /// known, whatever that outcome is. A failed browser launch is not
    /// fatal: the URL is printed for manual navigation either way.
    pub async fn authenticate(self) -> Result<String> {
        let listener = CallbackListener::bind(self.config.callback_addr()).await?;
        let auth_url = self.authorization_url();

        if self.config.open_browser
            && let Err(err) = open::that(auth_url.as_str())
        {
            warn!(error = %err, "could not open a browser");
        }
        eprintln!("Complete the login in your browser. If it did not open, visit:\n\n  {auth_url}\n");

        let callback = listener.wait(self.config.callback_timeout).await?;
        match callback.state.as_deref() {
            Some(state) if state == self.exchange.state => {}
            _ => return Err(AuthError::StateMismatch),
        }
        info!("authorization code received");

        let token = self.exchange_code(&callback.code).await?;

        // The token is still usable for this invocation even if it could
        // not be persisted; the next run will simply log in again.
        if let Err(err) = self.store.write(&token) {
            warn!(error = %err, "token obtained but not persisted");
        }

        Ok(token)
    }

    /// Complete the PKCE proof at the issuer token endpoint.
    async fn exchange_code(&self, code: &str) -> Result<String> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("code", code),
            ("redirect_uri", self.config.redirect_url.as_str()),
            ("code_verifier", self.exchange.verifier.as_str()),
        ];

        let response = reqwest::Client::new()
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(AuthError::TokenExchangeFailed)?
            .error_for_status()
            .map_err(AuthError::TokenExchangeFailed)?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(AuthError::TokenExchangeFailed)?;

        Ok(token.access_token)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn authorization_url_carries_the_full_parameter_set() {
        let config = AuthConfig::default();
        let store = TokenStore::at("/tmp/unused");
        let flow = LoginFlow::new(&config, &store).unwrap();

        let url = flow.authorization_url();
        assert_eq!(url.host_str(), Some("fluidstack.us.auth0.com"));
        assert_eq!(url.path(), "/authorize");

        let params: HashMap<String, String> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], config.client_id);
        assert_eq!(params["redirect_uri"], "http://localhost:5173");
        assert_eq!(params["scope"], "openid profile email offline_access");
        assert_eq!(params["code_challenge_method"], "S256");
        assert_eq!(params["audience"], "https://api.fluidstack.io");
        assert_eq!(params["state"], flow.exchange.state);
        assert_eq!(params["code_challenge"], flow.exchange.challenge);
    }
}
