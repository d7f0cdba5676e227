//! Webhooks of projects and the organization

use crate::error::ValidationError;
use crate::validate::{one_of, one_of_opt, Validate};
use serde::{Deserialize, Serialize};

const REQUEST_TYPES: &[&str] = &["POST", "GET"];

const CONTENT_TYPES: &[&str] = &[
    "multipart/form-data",
    "application/json",
    "application/x-www-form-urlencoded",
];

/// A registered webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Webhook {
    pub id: u64,
    pub project_id: Option<u64>,
    pub name: String,
    pub url: String,
    pub events: Vec<String>,
    pub headers: serde_json::Value,
    pub payload: serde_json::Value,
    pub is_active: bool,
    pub batching_enabled: bool,
    pub request_type: String,
    pub content_type: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Add a webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAddRequest {
    pub name: String,
    pub url: String,
    /// e.g. `file.translated`, `project.built`
    pub events: Vec<String>,
    /// `POST` or `GET`
    pub request_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batching_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub headers: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl Validate for WebhookAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.url.is_empty() {
            return Err(ValidationError::required("url"));
        }
        if self.events.is_empty() {
            return Err(ValidationError::required("events"));
        }
        if self.request_type.is_empty() {
            return Err(ValidationError::required("requestType"));
        }
        one_of("requestType", &self.request_type, REQUEST_TYPES)?;
        one_of_opt("contentType", self.content_type.as_deref(), CONTENT_TYPES)
    }
}
