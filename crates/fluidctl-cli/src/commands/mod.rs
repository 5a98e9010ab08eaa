//! Command handlers, one module per resource.

pub mod filesystem;
pub mod instance;
pub mod project;
pub mod slurm;

use anyhow::Context;
use fluidctl_auth::CredentialManager;
use fluidctl_client::Client;
use tracing::debug;

use crate::cli::Globals;

/// Resolve a credential and build an authenticated API client.
pub(crate) async fn api_client(globals: &Globals) -> anyhow::Result<Client> {
    debug!(url = %globals.url, "using Atlas server");

    let manager = CredentialManager::new()?;
    let token = manager
        .obtain(globals.token.as_deref())
        .await
        .context("failed to log in")?;

    fluidctl_client::build(globals.url.clone())
        .with_bearer_token(token)
        .build()
        .context("failed to build API client")
}
