//! Instance operations.

use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ApiError, expect_status};
use crate::types::InstanceCreateRequest;
use crate::{Client, PROJECT_HEADER};

/// Client for instance operations. Every call is scoped to a project.
pub struct InstancesClient<'a> {
    client: &'a Client,
}

impl<'a> InstancesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create an instance.
    pub async fn create(
        &self,
        project: Uuid,
        request: &InstanceCreateRequest,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .http()
            .post(self.client.endpoint("instances"))
            .header(PROJECT_HEADER, project.to_string())
            .json(request)
            .send()
            .await?;

        expect_status("create instance", StatusCode::CREATED, response.status())
    }

    /// List all instances in the project.
    pub async fn list(&self, project: Uuid) -> Result<Value, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.endpoint("instances"))
            .header(PROJECT_HEADER, project.to_string())
            .send()
            .await?;

        expect_status("list instances", StatusCode::OK, response.status())?;
        Ok(response.json().await?)
    }

    /// Fetch a single instance.
    pub async fn get(&self, project: Uuid, id: Uuid) -> Result<Value, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.endpoint(&format!("instances/{id}")))
            .header(PROJECT_HEADER, project.to_string())
            .send()
            .await?;

        expect_status("get instance", StatusCode::OK, response.status())?;
        Ok(response.json().await?)
    }

    /// Delete an instance.
    pub async fn delete(&self, project: Uuid, id: Uuid) -> Result<(), ApiError> {
        let response = self
            .client
            .http()
            .delete(self.client.endpoint(&format!("instances/{id}")))
            .header(PROJECT_HEADER, project.to_string())
            .send()
            .await?;

        expect_status("delete instance", StatusCode::NO_CONTENT, response.status())
    }
}
