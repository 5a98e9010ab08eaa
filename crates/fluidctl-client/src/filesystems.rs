//! Filesystem operations.

use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ApiError, expect_status};
use crate::types::FilesystemCreateRequest;
use crate::{Client, PROJECT_HEADER};

/// Client for filesystem operations. Every call is scoped to a project.
pub struct FilesystemsClient<'a> {
    client: &'a Client,
}

impl<'a> FilesystemsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a filesystem.
    pub async fn create(
        &self,
        project: Uuid,
        request: &FilesystemCreateRequest,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .http()
            .post(self.client.endpoint("filesystems"))
            .header(PROJECT_HEADER, project.to_string())
            .json(request)
            .send()
            .await?;

        expect_status("create filesystem", StatusCode::CREATED, response.status())
    }

    /// List all filesystems in the project.
    pub async fn list(&self, project: Uuid) -> Result<Value, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.endpoint("filesystems"))
            .header(PROJECT_HEADER, project.to_string())
            .send()
            .await?;

        expect_status("list filesystems", StatusCode::OK, response.status())?;
        Ok(response.json().await?)
    }

    /// Fetch a single filesystem.
    pub async fn get(&self, project: Uuid, id: Uuid) -> Result<Value, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.endpoint(&format!("filesystems/{id}")))
            .header(PROJECT_HEADER, project.to_string())
            .send()
            .await?;

        expect_status("get filesystem", StatusCode::OK, response.status())?;
        Ok(response.json().await?)
    }

    /// Delete a filesystem.
    pub async fn delete(&self, project: Uuid, id: Uuid) -> Result<(), ApiError> {
        let response = self
            .client
            .http()
            .delete(self.client.endpoint(&format!("filesystems/{id}")))
            .header(PROJECT_HEADER, project.to_string())
            .send()
            .await?;

        expect_status(
            "delete filesystem",
            StatusCode::NO_CONTENT,
            response.status(),
        )
    }
}
