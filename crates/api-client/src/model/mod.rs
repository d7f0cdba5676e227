//! Request and response models, one module per API resource group
//!
//! Each module provides the resource entities, enum-like wire constants,
//! list options ([`ListOptionsProvider`](crate::ListOptionsProvider)) and
//! request validators ([`Validate`](crate::Validate)). Modules are
//! independent of one another; the shared pieces live here.
//!
//! | Module | API resource group |
//! |--------|--------------------|
//! | `ai` | AI prompts and providers |
//! | `applications` | Application installations |
//! | `branches` | Version branches |
//! | `bundles` | Target file bundles |
//! | `clients` | Clients (Enterprise) |
//! | `dictionaries` | Dictionaries |
//! | `distributions` | Over-the-air distributions |
//! | `fields` | Custom fields |
//! | `file_formats` | File import/export options and format settings |
//! | `glossaries` | Glossaries, terms and concepts |
//! | `graphql` | GraphQL queries |
//! | `groups` | Groups (Enterprise) |
//! | `labels` | Labels |
//! | `languages` | Languages |
//! | `machine_translation_engines` | MT engines |
//! | `notifications` | Notifications |
//! | `projects` | Projects and project-level settings |
//! | `reports` | Reports, report templates and archives |
//! | `screenshots` | Screenshots and tags |
//! | `security_logs` | Security logs |
//! | `source_files` | Directories, files and revisions |
//! | `source_strings` | Source strings |
//! | `storages` | Storage uploads |
//! | `string_comments` | String comments and issues |
//! | `string_corrections` | String corrections |
//! | `string_translations` | Translations, approvals and votes |
//! | `tasks` | Tasks, task comments and templates |
//! | `teams` | Teams |
//! | `translation_memory` | Translation memories and segments |
//! | `translation_status` | Progress and QA checks |
//! | `translations` | Pre-translation, builds, uploads and exports |
//! | `users` | Users and project members |
//! | `vendors` | Vendors (Enterprise) |
//! | `webhooks` | Webhooks |
//! | `workflows` | Workflow steps and templates (Enterprise) |

pub mod ai;
pub mod applications;
pub mod branches;
pub mod bundles;
pub mod clients;
pub mod dictionaries;
pub mod distributions;
pub mod fields;
pub mod file_formats;
pub mod glossaries;
pub mod graphql;
pub mod groups;
pub mod labels;
pub mod languages;
pub mod machine_translation_engines;
pub mod notifications;
pub mod projects;
pub mod reports;
pub mod screenshots;
pub mod security_logs;
pub mod source_files;
pub mod source_strings;
pub mod storages;
pub mod string_comments;
pub mod string_corrections;
pub mod string_translations;
pub mod tasks;
pub mod teams;
pub mod translation_memory;
pub mod translation_status;
pub mod translations;
pub mod users;
pub mod vendors;
pub mod webhooks;
pub mod workflows;

use crate::error::ValidationError;
use crate::validate::{one_of, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Response envelopes
// ============================================================================

/// Single-resource envelope: `{"data": ...}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
}

/// One element of a list envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem<T> {
    pub data: T,
}

/// List envelope: `{"data": [{"data": ...}], "pagination": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<ListItem<T>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> ListResponse<T> {
    /// Unwrap the per-item envelopes
    pub fn into_items(self) -> Vec<T> {
        self.data.into_iter().map(|item| item.data).collect()
    }
}

/// Pagination block of a list envelope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
}

/// Error envelope: `{"error": {"code": 404, "message": "..."}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Body of [`ErrorResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: serde_json::Value,
    #[serde(default)]
    pub message: String,
}

/// Validation error envelope: `{"errors": [{"error": {"key": ..., "errors": [...]}}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<ValidationErrorItem>,
}

/// One entry of [`ValidationErrorResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorItem {
    pub error: FieldErrors,
}

/// Errors the API reported for one request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub key: String,
    #[serde(default)]
    pub errors: Vec<FieldErrorDetail>,
}

/// A single API-side field error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorDetail {
    pub code: String,
    pub message: String,
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}: {}", self.key, messages.join(", "))
    }
}

// ============================================================================
// JSON Patch
// ============================================================================

/// JSON Patch operation names accepted by edit endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
    Test,
}

impl PatchOp {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Replace => "replace",
            Self::Remove => "remove",
            Self::Test => "test",
        }
    }
}

impl From<PatchOp> for String {
    fn from(op: PatchOp) -> Self {
        op.as_str().to_string()
    }
}

const PATCH_OPS: &[&str] = &["add", "replace", "remove", "test"];

/// One JSON Patch operation of an edit request.
///
/// `op` is kept as a string so that values received from configuration can
/// be checked by [`Validate`] instead of failing to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub op: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub value: serde_json::Value,
}

impl UpdateRequest {
    /// Build an operation
    pub fn new(op: PatchOp, path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: op.into(),
            path: path.into(),
            value: value.into(),
        }
    }

    /// Build a `replace` operation
    pub fn replace(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::new(PatchOp::Replace, path, value)
    }

    /// Build a `remove` operation
    pub fn remove(path: impl Into<String>) -> Self {
        Self::new(PatchOp::Remove, path, serde_json::Value::Null)
    }
}

impl Validate for UpdateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.op.is_empty() {
            return Err(ValidationError::required("op"));
        }
        if self.path.is_empty() {
            return Err(ValidationError::required("path"));
        }
        one_of("op", &self.op, PATCH_OPS)?;
        if self.value.is_null() && self.op != PatchOp::Remove.as_str() {
            return Err(ValidationError::required("value"));
        }
        Ok(())
    }
}

/// Shared file/string export priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
}

/// Serde predicate for ids where zero means unset
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// `true` when both ids are set, for exclusive pairs
pub(crate) fn both_set(a: Option<u64>, b: Option<u64>) -> bool {
    a.is_some_and(|v| v > 0) && b.is_some_and(|v| v > 0)
}
