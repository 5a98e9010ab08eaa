//! Request bodies for the Atlas API.

use serde::Serialize;
use uuid::Uuid;

/// Body of `POST instances`.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceCreateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    pub preemptible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesystems: Option<Vec<Uuid>>,
}

/// Body of `POST projects`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCreateRequest {
    pub name: String,
}

/// Body of `POST filesystems`.
#[derive(Debug, Clone, Serialize)]
pub struct FilesystemCreateRequest {
    pub name: String,
    pub size: String,
}
