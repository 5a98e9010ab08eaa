//! Ephemeral single-request HTTP listener for the login redirect.
//!
//! Each login attempt owns its own listener instance; nothing is registered
//! on shared process-wide state. The listener accepts exactly one request on
//! `/`, hands the outcome to the waiting flow over a oneshot channel, and is
//! torn down unconditionally afterwards so the port is free for the next
//! invocation.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, oneshot};
use tracing::{debug, warn};

use crate::error::{AuthError, Result};

const SUCCESS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Authorization Successful</title>
</head>
<body>
    <p>Authorization successful. You can close this window.</p>
    <script>
        window.close();
    </script>
</body>
</html>
"#;

/// Parameters delivered by the issuer redirect.
#[derive(Debug)]
pub(crate) struct Callback {
    pub code: String,
    pub state: Option<String>,
}

type Outcome = Result<Callback>;

#[derive(Clone)]
struct ListenerState {
    // Consumed by the first request on `/`; later requests find it empty.
    outcome: Arc<Mutex<Option<oneshot::Sender<Outcome>>>>,
}

/// One-shot HTTP listener owned by a single login attempt.
pub(crate) struct CallbackListener {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    outcome: oneshot::Receiver<Outcome>,
}

impl CallbackListener {
    /// Bind the listener. This happens before the browser is opened so the
    /// redirect cannot race the bind.
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| AuthError::CallbackPortUnavailable { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| AuthError::CallbackPortUnavailable { addr, source })?;

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let state = ListenerState {
            outcome: Arc::new(Mutex::new(Some(outcome_tx))),
        };
        let app = Router::new()
            .route("/", get(handle_redirect))
            .with_state(state);

        tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(err) = serve.await {
                warn!(error = %err, "login callback listener failed");
            }
            debug!("login callback listener stopped");
        });

        Ok(Self {
            addr: local_addr,
            shutdown: Some(shutdown_tx),
            outcome: outcome_rx,
        })
    }

    /// The address the listener actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Wait for the single redirect request, bounded by `timeout`. The
    /// listener is torn down before this returns, whatever the outcome.
    pub async fn wait(mut self, timeout: Duration) -> Result<Callback> {
        let outcome = tokio::time::timeout(timeout, &mut self.outcome).await;
        self.teardown();

        match outcome {
            Err(_) => Err(AuthError::CallbackTimeout),
            // The server task went away without delivering a request.
            Ok(Err(_)) => Err(AuthError::AuthorizationDenied),
            Ok(Ok(outcome)) => outcome,
        }
    }

    fn teardown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

impl Drop for CallbackListener {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn handle_redirect(
    State(state): State<ListenerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(outcome) = state.outcome.lock().await.take() else {
        // The handoff already happened; nothing left to serve.
        return StatusCode::NOT_FOUND.into_response();
    };

    if let Some(error) = params.get("error") {
        debug!(error = %error, "issuer redirect reported an error");
        let _ = outcome.send(Err(AuthError::AuthorizationDenied));
        return (StatusCode::BAD_REQUEST, "Authorization failed").into_response();
    }

    match params.get("code") {
        Some(code) => {
            let callback = Callback {
                code: code.clone(),
                state: params.get("state").cloned(),
            };
            let _ = outcome.send(Ok(callback));
            Html(SUCCESS_PAGE).into_response()
        }
        None => {
            let _ = outcome.send(Err(AuthError::AuthorizationDenied));
            (StatusCode::BAD_REQUEST, "Authorization code not found").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, SocketAddr};

    use super::*;

    fn loopback() -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
    }

    #[tokio::test]
    async fn delivers_code_and_state_from_first_request() {
        let listener = CallbackListener::bind(loopback()).await.unwrap();
        let addr = listener.local_addr();
        let wait = tokio::spawn(listener.wait(Duration::from_secs(5)));

        let response = reqwest::get(format!("http://{addr}/?code=abc123&state=xyz"))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert!(response.text().await.unwrap().contains("close this window"));

        let callback = wait.await.unwrap().unwrap();
        assert_eq!(callback.code, "abc123");
        assert_eq!(callback.state.as_deref(), Some("xyz"));
    }

    #[tokio::test]
    async fn missing_code_fails_with_http_400() {
        let listener = CallbackListener::bind(loopback()).await.unwrap();
        let addr = listener.local_addr();
        let wait = tokio::spawn(listener.wait(Duration::from_secs(5)));

        let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

        assert!(matches!(
            wait.await.unwrap(),
            Err(AuthError::AuthorizationDenied)
        ));
    }

    #[tokio::test]
    async fn issuer_error_parameter_is_a_denial() {
        let listener = CallbackListener::bind(loopback()).await.unwrap();
        let addr = listener.local_addr();
        let wait = tokio::spawn(listener.wait(Duration::from_secs(5)));

        let response = reqwest::get(format!("http://{addr}/?error=access_denied"))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

        assert!(matches!(
            wait.await.unwrap(),
            Err(AuthError::AuthorizationDenied)
        ));
    }

    #[tokio::test]
    async fn times_out_without_a_callback() {
        let listener = CallbackListener::bind(loopback()).await.unwrap();

        assert!(matches!(
            listener.wait(Duration::from_millis(100)).await,
            Err(AuthError::CallbackTimeout)
        ));
    }

    #[tokio::test]
    async fn port_is_reusable_after_teardown() {
        let listener = CallbackListener::bind(loopback()).await.unwrap();
        let addr = listener.local_addr();
        let wait = tokio::spawn(listener.wait(Duration::from_secs(5)));

        reqwest::get(format!("http://{addr}/?code=abc123")).await.unwrap();
        wait.await.unwrap().unwrap();

        // Graceful shutdown is asynchronous; retry the rebind briefly.
        for attempt in 0..50 {
            match CallbackListener::bind(addr).await {
                Ok(_) => return,
                Err(_) if attempt < 49 => {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                }
                Err(err) => panic!("port never became reusable: {err}"),
            }
        }
    }

    #[tokio::test]
    async fn occupied_port_is_reported() {
        let occupant = TcpListener::bind(loopback()).await.unwrap();
        let addr = occupant.local_addr().unwrap();

        assert!(matches!(
            CallbackListener::bind(addr).await,
            Err(AuthError::CallbackPortUnavailable { .. })
        ));
    }
}
