//! Project operations.
//!
//! Projects are the root of the resource hierarchy and are not themselves
//! project-scoped, so no `X-PROJECT-ID` header is sent.

use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use crate::Client;
use crate::error::{ApiError, expect_status};
use crate::types::ProjectCreateRequest;

/// Client for project operations.
pub struct ProjectsClient<'a> {
    client: &'a Client,
}

impl<'a> ProjectsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a project.
    pub async fn create(&self, request: &ProjectCreateRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .http()
            .post(self.client.endpoint("projects"))
            .json(request)
            .send()
            .await?;

        expect_status("create project", StatusCode::CREATED, response.status())
    }

    /// List all projects.
    pub async fn list(&self) -> Result<Value, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.endpoint("projects"))
            .send()
            .await?;

        expect_status("list projects", StatusCode::OK, response.status())?;
        Ok(response.json().await?)
    }

    /// Fetch a single project.
    pub async fn get(&self, id: Uuid) -> Result<Value, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.endpoint(&format!("projects/{id}")))
            .send()
            .await?;

        expect_status("get project", StatusCode::OK, response.status())?;
        Ok(response.json().await?)
    }

    /// Delete a project.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let response = self
            .client
            .http()
            .delete(self.client.endpoint(&format!("projects/{id}")))
            .send()
            .await?;

        expect_status("delete project", StatusCode::NO_CONTENT, response.status())
    }
}
