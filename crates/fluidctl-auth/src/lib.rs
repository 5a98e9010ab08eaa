//! Credential management for the Fluidstack CLI.
//!
//! Owns the full lifecycle of the bearer token used against the Atlas API:
//! reading the cached token from `~/.fluidstack/token`, checking its expiry
//! claim, running the interactive OAuth2 Authorization-Code-with-PKCE login
//! flow when needed, and persisting the result for later invocations.
//!
//! The entry point is [`CredentialManager::obtain`]. [`LoginFlow`] exposes
//! the interactive flow directly so it can be driven without a browser in
//! tests.

pub mod claims;
pub mod config;
pub mod credentials;
pub mod error;
pub mod flow;
pub mod pkce;
pub mod store;

mod listener;

pub use config::AuthConfig;
pub use credentials::CredentialManager;
pub use error::{AuthError, Result};
pub use flow::LoginFlow;
pub use pkce::PkceExchange;
pub use store::TokenStore;
