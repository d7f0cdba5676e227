//! Version branches
//!
//! Maps to `/projects/{projectId}/branches` and the clone/merge sub-resources.

use crate::error::ValidationError;
use crate::model::Priority;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A project branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branch {
    pub id: u64,
    pub project_id: u64,
    pub name: String,
    pub title: Option<String>,
    pub export_pattern: Option<String>,
    pub priority: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Status of an asynchronous clone or merge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchOperationStatus {
    pub identifier: String,
    pub status: String,
    pub progress: u8,
    pub attributes: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

/// Summary of a finished merge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchMergeSummary {
    pub status: String,
    pub source_branch_id: u64,
    pub target_branch_id: u64,
    pub dry_run: bool,
    pub details: BranchMergeDetails,
}

/// Per-action counters of a merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchMergeDetails {
    pub added: u64,
    pub deleted: u64,
    pub updated: u64,
    pub conflicted: u64,
}

/// Options for listing branches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchesListOptions {
    /// Filter branches by name
    pub name: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for BranchesListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("name", self.name.as_deref());
        v.finish()
    }
}

/// Request to add a branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchesAddRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Validate for BranchesAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        Ok(())
    }
}

/// Request to clone a branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchesCloneRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Validate for BranchesCloneRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        Ok(())
    }
}

/// Request to merge a source branch into the addressed branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchesMergeRequest {
    pub source_branch_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl Validate for BranchesMergeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.source_branch_id == 0 {
            return Err(ValidationError::required("sourceBranchId"));
        }
        Ok(())
    }
}
