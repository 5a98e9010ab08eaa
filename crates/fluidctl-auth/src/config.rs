//! Login endpoint configuration.
//!
//! The issuer endpoints, client id, audience and redirect URI are fixed:
//! they must match what is registered with the issuer, so they are not
//! exposed as user-facing settings. The struct fields are public so tests
//! can point the flow at in-process endpoints.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

const DEFAULT_AUTH_URL: &str = "https://fluidstack.us.auth0.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://fluidstack.us.auth0.com/oauth/token";
/// Public OAuth client id for the CLI; not a secret.
const DEFAULT_CLIENT_ID: &str = "diPhN35HH6jVXs615vsafkdIQM4Y5rF8";
/// Audience identifying the Atlas API.
const DEFAULT_AUDIENCE: &str = "https://api.fluidstack.io";
/// Redirect URI registered with the issuer. Must agree with
/// `DEFAULT_CALLBACK_PORT` exactly or the issuer refuses the redirect.
const DEFAULT_REDIRECT_URL: &str = "http://localhost:5173";
const DEFAULT_CALLBACK_PORT: u16 = 5173;
const DEFAULT_SCOPES: &str = "openid profile email offline_access";
/// How long one login attempt waits for the browser callback.
const DEFAULT_CALLBACK_TIMEOUT: Duration = Duration::from_secs(300);

/// Configuration for one login flow.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Issuer authorization endpoint.
    pub auth_url: String,
    /// Issuer token endpoint.
    pub token_url: String,
    /// OAuth client id.
    pub client_id: String,
    /// Audience parameter identifying the target API.
    pub audience: String,
    /// Redirect URI sent to the issuer.
    pub redirect_url: String,
    /// Loopback port the callback listener binds.
    pub callback_port: u16,
    /// Space-separated scopes requested during login.
    pub scopes: String,
    /// Upper bound on the wait for the browser callback.
    pub callback_timeout: Duration,
    /// Whether to launch the system browser automatically.
    pub open_browser: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            callback_port: DEFAULT_CALLBACK_PORT,
            scopes: DEFAULT_SCOPES.to_string(),
            callback_timeout: DEFAULT_CALLBACK_TIMEOUT,
            open_browser: true,
        }
    }
}

impl AuthConfig {
    /// Loopback address the callback listener binds.
    pub fn callback_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.callback_port))
    }
}
