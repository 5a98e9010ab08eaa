//! Credential resolution order tests.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use fluidctl_auth::{AuthConfig, AuthError, CredentialManager, TokenStore};

fn bearer_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::json!({ "exp": exp }).to_string());
    format!("{header}.{payload}.sig")
}

/// A config that cannot reach a browser or an issuer: any attempt to run
/// the interactive flow times out almost immediately.
fn non_interactive_config(callback_port: u16) -> AuthConfig {
    AuthConfig {
        callback_port,
        redirect_url: format!("http://127.0.0.1:{callback_port}"),
        callback_timeout: Duration::from_millis(200),
        open_browser: false,
        ..AuthConfig::default()
    }
}

#[tokio::test]
async fn explicit_token_passes_through_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::at(dir.path().join("token"));
    let manager = CredentialManager::with_config(non_interactive_config(42331), store.clone());

    let token = manager.obtain(Some("ci-token")).await.unwrap();
    assert_eq!(token, "ci-token");

    // Pure pass-through: no store file was created or consulted.
    assert!(!store.path().exists());
}

#[tokio::test]
async fn explicit_token_wins_over_a_corrupt_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::at(dir.path().join("token"));
    store.write("garbage").unwrap();

    let manager = CredentialManager::with_config(non_interactive_config(42332), store);

    // The corrupt cached token is never even read.
    let token = manager.obtain(Some("ci-token")).await.unwrap();
    assert_eq!(token, "ci-token");
}

#[tokio::test]
async fn empty_explicit_token_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::at(dir.path().join("token"));
    let cached = bearer_token(Utc::now().timestamp() + 3600);
    store.write(&cached).unwrap();

    let manager = CredentialManager::with_config(non_interactive_config(42333), store);

    let token = manager.obtain(Some("")).await.unwrap();
    assert_eq!(token, cached);
}

#[tokio::test]
async fn valid_cached_token_is_returned_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::at(dir.path().join("token"));
    let cached = bearer_token(Utc::now().timestamp() + 3600);
    store.write(&cached).unwrap();

    let manager = CredentialManager::with_config(non_interactive_config(42334), store);

    // No issuer is running anywhere; success proves zero network access.
    let token = manager.obtain(None).await.unwrap();
    assert_eq!(token, cached);

    // A second invocation reuses the same cached value.
    let again = manager.obtain(None).await.unwrap();
    assert_eq!(again, cached);
}

#[tokio::test]
async fn expired_cached_token_triggers_the_login_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::at(dir.path().join("token"));
    store
        .write(&bearer_token(Utc::now().timestamp() - 3600))
        .unwrap();

    let manager = CredentialManager::with_config(non_interactive_config(42335), store);

    // The flow starts (rather than returning the stale token) and, with
    // nobody to answer the callback, times out.
    assert!(matches!(
        manager.obtain(None).await,
        Err(AuthError::CallbackTimeout)
    ));
}

#[tokio::test]
async fn malformed_cached_token_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::at(dir.path().join("token"));
    store.write("not-a-jwt").unwrap();

    let manager = CredentialManager::with_config(non_interactive_config(42336), store);

    // A corrupted store surfaces instead of silently re-logging in.
    assert!(matches!(
        manager.obtain(None).await,
        Err(AuthError::MalformedToken(_))
    ));
}

#[tokio::test]
async fn unreadable_store_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the token path is readable metadata but unreadable
    // contents, which must not be confused with an absent file.
    let store = TokenStore::at(dir.path());

    let manager = CredentialManager::with_config(non_interactive_config(42337), store);

    assert!(matches!(
        manager.obtain(None).await,
        Err(AuthError::StoreUnreadable { .. })
    ));
}

#[tokio::test]
async fn absent_store_triggers_the_login_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::at(dir.path().join("token"));

    let manager = CredentialManager::with_config(non_interactive_config(42338), store);

    assert!(matches!(
        manager.obtain(None).await,
        Err(AuthError::CallbackTimeout)
    ));
}
