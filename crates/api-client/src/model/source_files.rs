//! Directories, source files, file revisions and reviewed-file builds

use crate::error::ValidationError;
use crate::model::file_formats::{FileExportOptions, FileImportOptions};
use crate::model::{both_set, is_zero, Priority};
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::{one_of_opt, optional, Validate};
use serde::{Deserialize, Serialize};

/// How existing translations are treated when a file is updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileUpdateOption {
    ClearTranslationsAndApprovals,
    KeepTranslations,
    KeepTranslationsAndApprovals,
}

impl FileUpdateOption {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClearTranslationsAndApprovals => "clear_translations_and_approvals",
            Self::KeepTranslations => "keep_translations",
            Self::KeepTranslationsAndApprovals => "keep_translations_and_approvals",
        }
    }
}

impl From<FileUpdateOption> for String {
    fn from(option: FileUpdateOption) -> Self {
        option.as_str().to_string()
    }
}

pub(crate) const UPDATE_OPTIONS: &[&str] = &[
    "clear_translations_and_approvals",
    "keep_translations",
    "keep_translations_and_approvals",
];

// ============================================================================
// Entities
// ============================================================================

/// A project directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Directory {
    pub id: u64,
    pub project_id: u64,
    pub branch_id: Option<u64>,
    pub directory_id: Option<u64>,
    pub name: String,
    pub title: Option<String>,
    pub export_pattern: Option<String>,
    pub path: Option<String>,
    pub priority: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A source file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct File {
    pub id: u64,
    pub project_id: u64,
    pub branch_id: Option<u64>,
    pub directory_id: Option<u64>,
    pub name: String,
    pub title: Option<String>,
    pub context: Option<String>,
    #[serde(rename = "type")]
    pub r#type: String,
    pub path: String,
    pub status: String,
    pub revision_id: u64,
    pub priority: Option<String>,
    /// Shape depends on the file type
    pub import_options: serde_json::Value,
    pub export_options: serde_json::Value,
    pub excluded_target_languages: Vec<String>,
    pub parser_version: Option<u32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One revision of a source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileRevision {
    pub id: u64,
    pub project_id: u64,
    pub file_id: u64,
    pub restore_to_revision: Option<u64>,
    pub info: FileRevisionInfo,
    pub date: Option<String>,
}

/// Change counters of a file revision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRevisionInfo {
    pub added: FileRevisionCounts,
    pub deleted: FileRevisionCounts,
    pub updated: FileRevisionCounts,
}

/// Strings and words changed by a revision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRevisionCounts {
    pub strings: u64,
    pub words: u64,
}

/// Status of a reviewed-source-files build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewedSourceFilesBuild {
    pub id: u64,
    pub project_id: u64,
    pub status: String,
    pub progress: u8,
    pub attributes: serde_json::Value,
}

// ============================================================================
// List options
// ============================================================================

/// Options for listing directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListOptions {
    pub order_by: Option<String>,
    pub branch_id: Option<u64>,
    pub directory_id: Option<u64>,
    /// Filter by name or title
    pub filter: Option<String>,
    /// List nested directories too (requires `directory_id`)
    pub recursion: Option<bool>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for DirectoryListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_positive("branchId", self.branch_id);
        v.add_positive("directoryId", self.directory_id);
        v.add_str("filter", self.filter.as_deref());
        v.add_bool("recursion", self.recursion);
        v.finish()
    }
}

/// Options for listing files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListOptions {
    pub order_by: Option<String>,
    pub branch_id: Option<u64>,
    pub directory_id: Option<u64>,
    pub filter: Option<String>,
    pub recursion: Option<bool>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for FileListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_positive("branchId", self.branch_id);
        v.add_positive("directoryId", self.directory_id);
        v.add_str("filter", self.filter.as_deref());
        v.add_bool("recursion", self.recursion);
        v.finish()
    }
}

/// Options for listing reviewed-source-files builds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewedBuildListOptions {
    pub branch_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for ReviewedBuildListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_positive("branchId", self.branch_id);
        v.finish()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Add a directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryAddRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Validate for DirectoryAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if both_set(self.branch_id, self.directory_id) {
            return Err(ValidationError::conflict("branchId", "directoryId"));
        }
        Ok(())
    }
}

/// Add a file from a storage upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAddRequest {
    pub storage_id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Parser type, `auto` when omitted
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_options: Option<FileImportOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_options: Option<FileExportOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_target_languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attach_label_ids: Vec<u64>,
}

impl Validate for FileAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_id == 0 {
            return Err(ValidationError::required("storageId"));
        }
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if both_set(self.branch_id, self.directory_id) {
            return Err(ValidationError::conflict("branchId", "directoryId"));
        }
        optional(self.import_options.as_ref())?;
        optional(self.export_options.as_ref())
    }
}

/// Update a file from a new upload, or restore it to a revision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpdateRestoreRequest {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub storage_id: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub revision_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// See [`FileUpdateOption`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_options: Option<FileImportOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_options: Option<FileExportOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attach_label_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detach_label_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_model_context: Option<bool>,
}

impl Validate for FileUpdateRestoreRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_id == 0 && self.revision_id == 0 {
            return Err(ValidationError::field(
                "one of storageId or revisionId is required",
            ));
        }
        if self.storage_id > 0 && self.revision_id > 0 {
            return Err(ValidationError::field("use only one of revisionId or storageId"));
        }
        one_of_opt("updateOption", self.update_option.as_deref(), UPDATE_OPTIONS)?;
        optional(self.import_options.as_ref())?;
        optional(self.export_options.as_ref())
    }
}

/// Build the reviewed source files of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedSourceFilesBuildRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
}

impl Validate for ReviewedSourceFilesBuildRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::file_formats::{OtherImportOptions, PropertyExportOptions};

    #[test]
    fn test_update_restore_exclusive() {
        let nil: Option<&FileUpdateRestoreRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let req = FileUpdateRestoreRequest {
            storage_id: 1,
            revision_id: 1,
            ..Default::default()
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "use only one of revisionId or storageId"
        );

        assert_eq!(
            FileUpdateRestoreRequest::default().validate().unwrap_err().to_string(),
            "one of storageId or revisionId is required"
        );

        let req = FileUpdateRestoreRequest {
            revision_id: 2,
            ..Default::default()
        };
        assert!(req.validate().is_ok());
        assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({"revisionId": 2}));
    }

    #[test]
    fn test_update_restore_options() {
        let req = FileUpdateRestoreRequest {
            storage_id: 61,
            update_option: Some("drop_everything".into()),
            ..Default::default()
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "invalid updateOption: \"drop_everything\""
        );

        let req = FileUpdateRestoreRequest {
            storage_id: 61,
            update_option: Some(FileUpdateOption::KeepTranslations.into()),
            export_options: Some(FileExportOptions::Property(PropertyExportOptions {
                escape_quotes: Some(7),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "escapeQuotes must be between 0 and 3"
        );
    }

    #[test]
    fn test_file_add_request() {
        let nil: Option<&FileAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let mut req = FileAddRequest::default();
        assert_eq!(req.validate().unwrap_err().to_string(), "storageId is required");
        req.storage_id = 61;
        assert_eq!(req.validate().unwrap_err().to_string(), "name is required");
        req.name = "umbrella_app.xliff".into();
        req.branch_id = Some(1);
        req.directory_id = Some(4);
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "branchId and directoryId cannot be used in the same request"
        );
        req.branch_id = None;
        req.import_options = Some(FileImportOptions::Other(OtherImportOptions {
            content_segmentation: None,
            srx_storage_id: Some(3),
        }));
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "srxStorageId can be used only when contentSegmentation is enabled"
        );
        req.import_options = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_directory_add_request() {
        assert_eq!(
            DirectoryAddRequest::default().validate().unwrap_err().to_string(),
            "name is required"
        );
        let req = DirectoryAddRequest {
            name: "main".into(),
            branch_id: Some(1),
            directory_id: Some(0),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
        assert!(ReviewedSourceFilesBuildRequest::default().validate().is_ok());
    }

    #[test]
    fn test_list_options() {
        let opts = FileListOptions {
            directory_id: Some(4),
            recursion: Some(true),
            filter: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(opts.values().0.encode(), "directoryId=4&recursion=true");

        let nil: Option<&DirectoryListOptions> = None;
        assert_eq!(nil.values(), (Values::new(), false));

        let opts = DirectoryListOptions {
            order_by: Some("createdAt desc,name".into()),
            ..Default::default()
        };
        assert_eq!(opts.values().0.get("orderBy"), Some("createdAt desc,name"));
    }

    #[test]
    fn test_file_deserialize() {
        let json = r#"{
            "id": 44,
            "projectId": 2,
            "branchId": 34,
            "directoryId": null,
            "name": "umbrella_app.xliff",
            "type": "xliff",
            "path": "/directory1/directory2/umbrella_app.xliff",
            "status": "active",
            "revisionId": 1,
            "importOptions": {"firstLineContainsHeader": false},
            "excludedTargetLanguages": ["en"]
        }"#;
        let file: File = serde_json::from_str(json).unwrap();
        assert_eq!(file.r#type, "xliff");
        assert!(file.directory_id.is_none());
        assert_eq!(file.import_options["firstLineContainsHeader"], false);
    }
}
