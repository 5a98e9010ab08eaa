//! Slurm cluster operations.

use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ApiError, expect_status};
use crate::{Client, PROJECT_HEADER};

/// Client for Slurm operations. Every call is scoped to a project.
pub struct SlurmClient<'a> {
    client: &'a Client,
}

impl<'a> SlurmClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List all Slurm clusters in the project.
    pub async fn list_clusters(&self, project: Uuid) -> Result<Value, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.endpoint("slurm/clusters"))
            .header(PROJECT_HEADER, project.to_string())
            .send()
            .await?;

        expect_status("list slurm clusters", StatusCode::OK, response.status())?;
        Ok(response.json().await?)
    }
}
