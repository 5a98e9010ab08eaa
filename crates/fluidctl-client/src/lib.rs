//! HTTP client for the Atlas control plane API.
//!
//! Wraps a reqwest client and exposes one sub-client per resource. Callers
//! supply a bearer token obtained from `fluidctl-auth`; every request is
//! sent against the `/api/v1alpha1/` prefix of the configured server URL.
//! List and describe responses are returned as opaque JSON so the command
//! layer can pass them through to the output marshaller untouched.

mod error;
mod filesystems;
mod instances;
mod projects;
mod slurm;
mod types;

pub use error::ApiError;
pub use filesystems::FilesystemsClient;
pub use instances::InstancesClient;
pub use projects::ProjectsClient;
pub use slurm::SlurmClient;
pub use types::{FilesystemCreateRequest, InstanceCreateRequest, ProjectCreateRequest};

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

/// Header carrying the project scope for project-bound resources.
pub(crate) const PROJECT_HEADER: &str = "X-PROJECT-ID";

/// API version prefix appended to the server URL.
const API_PREFIX: &str = "api/v1alpha1/";

/// Create a builder for constructing a client against `base_url`.
pub fn build(base_url: Url) -> ClientBuilder {
    ClientBuilder::new(base_url)
}

/// HTTP client for the Atlas API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Base URL of the API, including the version prefix.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> Url {
        self.base_url.join(path).expect("endpoint path is valid")
    }

    /// Instance operations.
    pub fn instances(&self) -> InstancesClient<'_> {
        InstancesClient::new(self)
    }

    /// Project operations.
    pub fn projects(&self) -> ProjectsClient<'_> {
        ProjectsClient::new(self)
    }

    /// Filesystem operations.
    pub fn filesystems(&self) -> FilesystemsClient<'_> {
        FilesystemsClient::new(self)
    }

    /// Slurm cluster operations.
    pub fn slurm(&self) -> SlurmClient<'_> {
        SlurmClient::new(self)
    }
}

/// Builder for constructing a [`Client`].
///
/// Created via [`build`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Url,
    bearer_token: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with the required server URL.
    pub fn new(mut base_url: Url) -> Self {
        // Ensure that no path segments are dropped when joining on this URL.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let base_url = base_url.join(API_PREFIX).expect("api prefix is a valid path");

        Self {
            base_url,
            bearer_token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` on every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Build the [`Client`].
    pub fn build(self) -> Result<Client, ApiError> {
        let http = if let Some(token) = self.bearer_token {
            let mut value = HeaderValue::try_from(format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidToken)?;
            value.set_sensitive(true);

            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);

            reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .map_err(ApiError::Transport)?
        } else {
            reqwest::Client::new()
        };

        Ok(Client {
            http,
            base_url: self.base_url,
        })
    }
}
