//! Error types for the credential subsystem.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while obtaining a bearer credential.
///
/// Every variant is terminal for the current invocation; nothing is retried
/// automatically.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to draw random bytes from the system entropy source")]
    EntropyUnavailable,

    #[error("could not resolve the current user's home directory")]
    HomeDirUnavailable,

    #[error("failed to bind the login callback listener on {addr}")]
    CallbackPortUnavailable {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("timed out waiting for the login callback")]
    CallbackTimeout,

    #[error("authorization was denied or returned no code")]
    AuthorizationDenied,

    #[error("callback state does not match this login attempt")]
    StateMismatch,

    #[error("failed to exchange the authorization code for a token")]
    TokenExchangeFailed(#[source] reqwest::Error),

    #[error("cached token is malformed: {0}")]
    MalformedToken(String),

    #[error("failed to read token store at {path}")]
    StoreUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to persist token to {path}")]
    PersistFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for credential operations.
pub type Result<T> = std::result::Result<T, AuthError>;
