//! Target file bundles

use crate::error::ValidationError;
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A bundle of strings exported into a single target file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bundle {
    pub id: u64,
    pub name: String,
    pub format: String,
    pub source_patterns: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub export_pattern: String,
    pub is_multilingual: bool,
    pub include_project_source_language: bool,
    pub include_in_context_pseudo_language: bool,
    pub label_ids: Vec<u64>,
    pub exclude_label_ids: Vec<u64>,
    pub web_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Status of a bundle export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BundleExport {
    pub identifier: String,
    pub status: String,
    pub progress: u8,
    pub attributes: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

/// Add a bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleAddRequest {
    pub name: String,
    /// Target file format, e.g. `crowdin-resx`
    pub format: String,
    pub source_patterns: Vec<String>,
    pub export_pattern: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_patterns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multilingual: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_project_source_language: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_in_context_pseudo_language: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_label_ids: Vec<u64>,
}

impl Validate for BundleAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.format.is_empty() {
            return Err(ValidationError::required("format"));
        }
        if self.source_patterns.is_empty() {
            return Err(ValidationError::required("sourcePatterns"));
        }
        if self.export_pattern.is_empty() {
            return Err(ValidationError::required("exportPattern"));
        }
        Ok(())
    }
}
