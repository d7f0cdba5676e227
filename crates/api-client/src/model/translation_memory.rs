//! Translation memories and their segments

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::{one_of_opt, Validate};
use serde::{Deserialize, Serialize};

const EXPORT_FORMATS: &[&str] = &["tmx", "csv", "xlsx"];

/// A translation memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationMemory {
    pub id: u64,
    pub group_id: u64,
    pub user_id: u64,
    pub name: String,
    pub language_id: String,
    pub language_ids: Vec<String>,
    pub segments_count: u64,
    pub default_project_ids: Vec<u64>,
    pub project_ids: Vec<u64>,
    pub web_url: Option<String>,
    pub created_at: Option<String>,
}

/// Status of a TM import or export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TmOperationStatus {
    pub identifier: String,
    pub status: String,
    pub progress: u8,
    pub attributes: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

/// A concordance hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TmConcordanceMatch {
    pub tm: Option<TmRef>,
    pub record_id: u64,
    pub source: String,
    pub target: String,
    pub relevant: u8,
    pub substituted: Option<String>,
    pub updated_at: Option<String>,
}

/// Memory a concordance hit came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmRef {
    pub id: u64,
    pub name: String,
}

/// A segment: one aligned unit across languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TmSegment {
    pub id: u64,
    pub records: Vec<TmSegmentRecord>,
}

/// One language's text in a segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TmSegmentRecord {
    #[serde(skip_serializing_if = "crate::model::is_zero")]
    pub id: u64,
    pub language_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Options for listing translation memories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMemoriesListOptions {
    pub order_by: Option<String>,
    pub user_id: Option<u64>,
    /// `Some(0)` lists memories outside any group
    pub group_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for TranslationMemoriesListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_positive("userId", self.user_id);
        v.add_some("groupId", self.group_id);
        v.finish()
    }
}

/// Options for listing TM segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TmSegmentsListOptions {
    pub order_by: Option<String>,
    /// CroQL filter expression
    pub croql: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for TmSegmentsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_str("croql", self.croql.as_deref());
        v.finish()
    }
}

/// Add a translation memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMemoryAddRequest {
    pub name: String,
    pub language_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
}

impl Validate for TranslationMemoryAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.language_id.is_empty() {
            return Err(ValidationError::required("languageId"));
        }
        Ok(())
    }
}

/// Export a translation memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmExportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_id: Option<String>,
    /// `tmx` (default), `csv` or `xlsx`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Validate for TmExportRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of_opt("format", self.format.as_deref(), EXPORT_FORMATS)
    }
}

/// Import a file from storage into a translation memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmImportRequest {
    pub storage_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_contains_header: Option<bool>,
    /// Column index per language id, for CSV/XLSX imports
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub scheme: serde_json::Map<String, serde_json::Value>,
}

impl Validate for TmImportRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_id == 0 {
            return Err(ValidationError::required("storageId"));
        }
        Ok(())
    }
}

/// Search memories for segments similar to the given expressions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmConcordanceSearchRequest {
    pub source_language_id: String,
    pub target_language_id: String,
    pub auto_substitution: Option<bool>,
    /// Minimal relevance percentage, 0..=100
    pub min_relevant: Option<u8>,
    pub expressions: Vec<String>,
}

impl Validate for TmConcordanceSearchRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.source_language_id.is_empty() {
            return Err(ValidationError::required("sourceLanguageId"));
        }
        if self.target_language_id.is_empty() {
            return Err(ValidationError::required("targetLanguageId"));
        }
        if self.auto_substitution.is_none() {
            return Err(ValidationError::required("autoSubstitution"));
        }
        match self.min_relevant {
            None => return Err(ValidationError::required("minRelevant")),
            Some(v) if v > 100 => return Err(ValidationError::out_of_range("minRelevant", 0, 100)),
            Some(_) => {}
        }
        if self.expressions.is_empty() {
            return Err(ValidationError::required("expressions"));
        }
        Ok(())
    }
}

/// Add a segment to a translation memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmSegmentAddRequest {
    pub records: Vec<TmSegmentRecord>,
}

impl Validate for TmSegmentAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.records.is_empty() {
            return Err(ValidationError::required("records"));
        }
        for record in &self.records {
            if record.language_id.is_empty() {
                return Err(ValidationError::required("languageId"));
            }
            if record.text.is_empty() {
                return Err(ValidationError::required("text"));
            }
        }
        Ok(())
    }
}
