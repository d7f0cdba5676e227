//! Source strings and string-based uploads

use crate::error::ValidationError;
use crate::model::both_set;
use crate::model::file_formats::FileImportOptions;
use crate::model::source_files::UPDATE_OPTIONS;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::{one_of_opt, optional, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String text: plain, or plural forms keyed by category (`one`, `other`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    Plain(String),
    Plural(BTreeMap<String, String>),
}

impl SourceText {
    /// Whether there is no text at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.is_empty(),
            Self::Plural(forms) => forms.is_empty(),
        }
    }
}

impl Default for SourceText {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<BTreeMap<String, String>> for SourceText {
    fn from(forms: BTreeMap<String, String>) -> Self {
        Self::Plural(forms)
    }
}

/// A source string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceString {
    pub id: u64,
    pub project_id: u64,
    pub branch_id: Option<u64>,
    pub file_id: Option<u64>,
    pub directory_id: Option<u64>,
    pub identifier: String,
    pub text: SourceText,
    #[serde(rename = "type")]
    pub r#type: String,
    pub context: Option<String>,
    pub max_length: u32,
    pub is_hidden: bool,
    pub is_duplicate: bool,
    pub master_string_id: Option<u64>,
    pub revision: u64,
    pub has_plurals: bool,
    pub is_icu: bool,
    pub label_ids: Vec<u64>,
    pub web_url: Option<String>,
    pub fields: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Status of a string-based upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceStringsUploadStatus {
    pub identifier: String,
    pub status: String,
    pub progress: u8,
    pub attributes: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

/// Options for listing source strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceStringsListOptions {
    pub order_by: Option<String>,
    /// 0 or 1
    pub denormalize_placeholders: Option<u8>,
    pub label_ids: Vec<u64>,
    pub file_id: Option<u64>,
    pub branch_id: Option<u64>,
    pub directory_id: Option<u64>,
    pub task_id: Option<u64>,
    /// CroQL query, cannot be combined with `filter`
    pub croql: Option<String>,
    pub filter: Option<String>,
    /// `identifier`, `text` or `context`
    pub scope: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for SourceStringsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_flag("denormalizePlaceholders", self.denormalize_placeholders);
        v.add_joined("labelIds", &self.label_ids);
        v.add_positive("fileId", self.file_id);
        v.add_positive("branchId", self.branch_id);
        v.add_positive("directoryId", self.directory_id);
        v.add_positive("taskId", self.task_id);
        v.add_str("croql", self.croql.as_deref());
        v.add_str("filter", self.filter.as_deref());
        v.add_str("scope", self.scope.as_deref());
        v.finish()
    }
}

/// Options for fetching one source string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStringsGetOptions {
    /// 0 or 1
    pub denormalize_placeholders: Option<u8>,
}

impl ListOptionsProvider for SourceStringsGetOptions {
    fn values(&self) -> (Values, bool) {
        let mut v = Values::new();
        v.add_flag("denormalizePlaceholders", self.denormalize_placeholders);
        v.finish()
    }
}

/// Add a source string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStringsAddRequest {
    pub text: SourceText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<serde_json::Value>,
}

impl Validate for SourceStringsAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.text.is_empty() {
            return Err(ValidationError::required("text"));
        }
        if both_set(self.file_id, self.branch_id) {
            return Err(ValidationError::conflict("fileId", "branchId"));
        }
        Ok(())
    }
}

/// Upload strings into a branch of a string-based project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStringsUploadRequest {
    pub storage_id: u64,
    pub branch_id: u64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_mode: Option<bool>,
    /// Honored only with `update_strings`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_options: Option<FileImportOptions>,
}

impl Validate for SourceStringsUploadRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_id == 0 {
            return Err(ValidationError::required("storageId"));
        }
        if self.branch_id == 0 {
            return Err(ValidationError::required("branchId"));
        }
        let update_option = self.update_option.as_deref().filter(|o| !o.is_empty());
        if update_option.is_some() && self.update_strings != Some(true) {
            return Err(ValidationError::field(
                "updateOption can be used only when updateStrings is enabled",
            ));
        }
        one_of_opt("updateOption", update_option, UPDATE_OPTIONS)?;
        optional(self.import_options.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::file_formats::SpreadsheetImportOptions;
    use crate::model::source_files::FileUpdateOption;

    #[test]
    fn test_source_text_shapes() {
        let s: SourceString = serde_json::from_str(r#"{"id": 1, "text": "Not all videos are shown"}"#).unwrap();
        assert_eq!(s.text, SourceText::Plain("Not all videos are shown".into()));

        let s: SourceString =
            serde_json::from_str(r#"{"id": 1, "text": {"one": "string", "other": "strings"}}"#).unwrap();
        match s.text {
            SourceText::Plural(forms) => assert_eq!(forms["other"], "strings"),
            SourceText::Plain(_) => panic!("expected plural text"),
        }

        assert!(serde_json::from_str::<SourceText>("42").is_err());
    }

    #[test]
    fn test_add_request() {
        let nil: Option<&SourceStringsAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        assert_eq!(
            SourceStringsAddRequest::default().validate().unwrap_err().to_string(),
            "text is required"
        );
        let req = SourceStringsAddRequest {
            text: SourceText::Plural(BTreeMap::new()),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "text is required");

        let req = SourceStringsAddRequest {
            text: "Not all videos are shown to users".into(),
            file_id: Some(5),
            branch_id: Some(2),
            ..Default::default()
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "fileId and branchId cannot be used in the same request"
        );

        let req = SourceStringsAddRequest {
            file_id: Some(5),
            branch_id: None,
            ..req
        };
        assert!(req.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"text": "Not all videos are shown to users", "fileId": 5})
        );
    }

    #[test]
    fn test_upload_request() {
        let nil: Option<&SourceStringsUploadRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let mut req = SourceStringsUploadRequest::default();
        assert_eq!(req.validate().unwrap_err().to_string(), "storageId is required");
        req.storage_id = 61;
        assert_eq!(req.validate().unwrap_err().to_string(), "branchId is required");
        req.branch_id = 34;
        assert!(req.validate().is_ok());

        req.update_option = Some(FileUpdateOption::KeepTranslations.into());
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "updateOption can be used only when updateStrings is enabled"
        );
        req.update_strings = Some(true);
        assert!(req.validate().is_ok());

        req.update_option = Some("keep_nothing".into());
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "invalid updateOption: \"keep_nothing\""
        );

        req.update_option = None;
        req.import_options = Some(FileImportOptions::Spreadsheet(SpreadsheetImportOptions {
            srx_storage_id: Some(1),
            ..Default::default()
        }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_list_options() {
        let opts = SourceStringsListOptions {
            denormalize_placeholders: Some(1),
            label_ids: vec![1, 2],
            task_id: Some(0),
            croql: Some("text contains \"Be My Eyes\"".into()),
            scope: Some("identifier".into()),
            ..Default::default()
        };
        let (v, ok) = opts.values();
        assert!(ok);
        assert_eq!(v.get("labelIds"), Some("1,2"));
        assert!(!v.contains_key("taskId"));
        assert_eq!(v.len(), 4);

        let get = SourceStringsGetOptions {
            denormalize_placeholders: Some(9),
        };
        assert_eq!(get.values(), (Values::new(), false));
    }
}
