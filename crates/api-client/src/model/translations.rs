//! Pre-translation, project builds, translation uploads and exports

use crate::error::ValidationError;
use crate::model::both_set;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::{in_range, nested, one_of_opt, Validate};
use serde::{Deserialize, Serialize};

const PRE_TRANSLATION_METHODS: &[&str] = &["tm", "mt", "ai"];
const CHAR_TRANSFORMATIONS: &[&str] = &["asian", "european", "arabic", "cyrillic"];

/// Pre-translation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreTranslationMethod {
    Tm,
    Mt,
    Ai,
}

impl PreTranslationMethod {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tm => "tm",
            Self::Mt => "mt",
            Self::Ai => "ai",
        }
    }
}

impl From<PreTranslationMethod> for String {
    fn from(method: PreTranslationMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Character set used by pseudo-localization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharTransformation {
    Asian,
    European,
    Arabic,
    Cyrillic,
}

impl CharTransformation {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asian => "asian",
            Self::European => "european",
            Self::Arabic => "arabic",
            Self::Cyrillic => "cyrillic",
        }
    }
}

impl From<CharTransformation> for String {
    fn from(t: CharTransformation) -> Self {
        t.as_str().to_string()
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Status of a pre-translation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreTranslation {
    pub identifier: String,
    pub status: String,
    pub progress: u8,
    pub attributes: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

/// A project translation build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectBuild {
    pub id: u64,
    pub project_id: u64,
    pub status: String,
    pub progress: u8,
    pub attributes: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub finished_at: Option<String>,
}

/// Temporary download URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadLink {
    pub url: String,
    pub expire_in: Option<String>,
}

/// Result of a translation upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadTranslations {
    pub project_id: u64,
    pub storage_id: u64,
    pub language_id: String,
    pub file_id: Option<u64>,
    pub branch_id: Option<u64>,
}

/// Options for listing project builds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildsListOptions {
    pub branch_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for BuildsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_positive("branchId", self.branch_id);
        v.finish()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Pairs of export flags that contradict each other
fn check_export_flags(
    skip_untranslated_strings: Option<bool>,
    skip_untranslated_files: Option<bool>,
    export_approved_only: Option<bool>,
    export_with_min_approvals_count: Option<u32>,
) -> Result<(), ValidationError> {
    if skip_untranslated_strings == Some(true) && skip_untranslated_files == Some(true) {
        return Err(ValidationError::conflict(
            "skipUntranslatedStrings",
            "skipUntranslatedFiles",
        ));
    }
    if export_approved_only == Some(true) && export_with_min_approvals_count.is_some_and(|c| c > 0)
    {
        return Err(ValidationError::conflict(
            "exportApprovedOnly",
            "exportWithMinApprovalsCount",
        ));
    }
    Ok(())
}

/// Pre-translate files or branches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreTranslationRequest {
    pub language_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branch_ids: Vec<u64>,
    /// See [`PreTranslationMethod`], `tm` when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Machine translation engine, required with `mt`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<u64>,
    /// AI prompt, required with `ai`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_prompt_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_approve_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_translations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_approved_translations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_untranslated_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_with_perfect_match_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallback_languages: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_label_ids: Vec<u64>,
}

impl Validate for PreTranslationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.language_ids.is_empty() {
            return Err(ValidationError::required("languageIds"));
        }
        if self.file_ids.is_empty() && self.branch_ids.is_empty() {
            return Err(ValidationError::field("one of fileIds or branchIds is required"));
        }
        let method = self.method.as_deref();
        one_of_opt("method", method, PRE_TRANSLATION_METHODS)?;
        if method == Some(PreTranslationMethod::Mt.as_str()) && !self.engine_id.is_some_and(|id| id > 0) {
            return Err(ValidationError::required("engineId"));
        }
        if method == Some(PreTranslationMethod::Ai.as_str())
            && !self.ai_prompt_id.is_some_and(|id| id > 0)
        {
            return Err(ValidationError::required("aiPromptId"));
        }
        Ok(())
    }
}

/// Build a project's translations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBuildRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_language_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_with_min_approvals_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_strings_that_passed_workflow: Option<bool>,
}

impl Validate for ProjectBuildRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_export_flags(
            self.skip_untranslated_strings,
            self.skip_untranslated_files,
            self.export_approved_only,
            self.export_with_min_approvals_count,
        )
    }
}

/// Build a pseudo-localized copy of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudoBuildProjectRequest {
    pub pseudo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Percentage, -50 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_transformation: Option<i32>,
    /// See [`CharTransformation`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_transformation: Option<String>,
}

impl Default for PseudoBuildProjectRequest {
    fn default() -> Self {
        Self {
            pseudo: true,
            branch_id: None,
            prefix: None,
            suffix: None,
            length_transformation: None,
            char_transformation: None,
        }
    }
}

impl Validate for PseudoBuildProjectRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        in_range("lengthTransformation", self.length_transformation, -50, 100)?;
        one_of_opt(
            "charTransformation",
            self.char_transformation.as_deref(),
            CHAR_TRANSFORMATIONS,
        )
    }
}

/// Body of `POST /projects/{projectId}/translations/builds`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildProjectRequest {
    Pseudo(PseudoBuildProjectRequest),
    Regular(ProjectBuildRequest),
}

impl Validate for BuildProjectRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Pseudo(req) => req.validate(),
            Self::Regular(req) => req.validate(),
        }
    }
}

/// Envelope carrying a build request, checked for presence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildProjectTranslationRequest {
    #[serde(flatten)]
    pub request: Option<BuildProjectRequest>,
}

impl Validate for BuildProjectTranslationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        nested("request", self.request.as_ref())
    }
}

/// Build translations of a directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProjectDirectoryTranslationRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_language_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_with_min_approvals_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_strings_that_passed_workflow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_folder_hierarchy: Option<bool>,
}

impl Validate for BuildProjectDirectoryTranslationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_export_flags(
            self.skip_untranslated_strings,
            self.skip_untranslated_files,
            self.export_approved_only,
            self.export_with_min_approvals_count,
        )
    }
}

/// Build translations of a single file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProjectFileTranslationRequest {
    pub target_language_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_with_min_approvals_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_strings_that_passed_workflow: Option<bool>,
}

impl Validate for BuildProjectFileTranslationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.target_language_id.is_empty() {
            return Err(ValidationError::required("targetLanguageId"));
        }
        check_export_flags(
            self.skip_untranslated_strings,
            self.skip_untranslated_files,
            self.export_approved_only,
            self.export_with_min_approvals_count,
        )
    }
}

/// Upload translations for a file or a string-based branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTranslationsRequest {
    pub storage_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_eq_suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_approve_imported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_to_tm: Vec<u64>,
}

impl Validate for UploadTranslationsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_id == 0 {
            return Err(ValidationError::required("storageId"));
        }
        if both_set(self.file_id, self.branch_id) {
            return Err(ValidationError::conflict("fileId", "branchId"));
        }
        if !self.file_id.is_some_and(|id| id > 0) && !self.branch_id.is_some_and(|id| id > 0) {
            return Err(ValidationError::field("one of fileId or branchId is required"));
        }
        Ok(())
    }
}

/// Export translations of a language in a chosen format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTranslationRequest {
    pub target_language_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branch_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directory_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_with_min_approvals_count: Option<u32>,
}

impl Validate for ExportTranslationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.target_language_id.is_empty() {
            return Err(ValidationError::required("targetLanguageId"));
        }
        check_export_flags(
            self.skip_untranslated_strings,
            self.skip_untranslated_files,
            self.export_approved_only,
            self.export_with_min_approvals_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre_translation() -> PreTranslationRequest {
        PreTranslationRequest {
            language_ids: vec!["uk".into()],
            file_ids: vec![1],
            ..Default::default()
        }
    }

    #[test]
    fn test_pre_translation_request() {
        let nil: Option<&PreTranslationRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        assert_eq!(
            PreTranslationRequest::default().validate().unwrap_err().to_string(),
            "languageIds is required"
        );
        let req = PreTranslationRequest {
            file_ids: vec![],
            ..pre_translation()
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "one of fileIds or branchIds is required"
        );
        assert!(pre_translation().validate().is_ok());
    }

    #[test]
    fn test_pre_translation_method_rules() {
        let req = PreTranslationRequest {
            method: Some("human".into()),
            ..pre_translation()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "invalid method: \"human\"");

        let req = PreTranslationRequest {
            method: Some(PreTranslationMethod::Mt.into()),
            ..pre_translation()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "engineId is required");
        let req = PreTranslationRequest {
            engine_id: Some(3),
            ..req
        };
        assert!(req.validate().is_ok());

        let req = PreTranslationRequest {
            method: Some(PreTranslationMethod::Ai.into()),
            engine_id: Some(3),
            ..pre_translation()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "aiPromptId is required");
    }

    #[test]
    fn test_build_request_delegation() {
        let req = BuildProjectRequest::Regular(ProjectBuildRequest {
            skip_untranslated_strings: Some(true),
            skip_untranslated_files: Some(true),
            ..Default::default()
        });
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "skipUntranslatedStrings and skipUntranslatedFiles cannot be used in the same request"
        );

        let req = BuildProjectRequest::Regular(ProjectBuildRequest {
            export_approved_only: Some(true),
            export_with_min_approvals_count: Some(2),
            ..Default::default()
        });
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "exportApprovedOnly and exportWithMinApprovalsCount cannot be used in the same request"
        );

        let req = BuildProjectRequest::Pseudo(PseudoBuildProjectRequest {
            length_transformation: Some(101),
            ..Default::default()
        });
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "lengthTransformation must be between -50 and 100"
        );

        let req = BuildProjectRequest::Pseudo(PseudoBuildProjectRequest {
            char_transformation: Some("latin".into()),
            ..Default::default()
        });
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "invalid charTransformation: \"latin\""
        );

        let envelope = BuildProjectTranslationRequest::default();
        assert_eq!(envelope.validate().unwrap_err().to_string(), "request is required");
    }

    #[test]
    fn test_build_request_shapes() {
        let pseudo = BuildProjectRequest::Pseudo(PseudoBuildProjectRequest {
            prefix: Some("[".into()),
            char_transformation: Some(CharTransformation::Cyrillic.into()),
            ..Default::default()
        });
        assert!(pseudo.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&pseudo).unwrap(),
            serde_json::json!({"pseudo": true, "prefix": "[", "charTransformation": "cyrillic"})
        );

        let decoded: BuildProjectRequest =
            serde_json::from_str(r#"{"targetLanguageIds": ["uk"]}"#).unwrap();
        assert!(matches!(decoded, BuildProjectRequest::Regular(_)));
        let decoded: BuildProjectRequest = serde_json::from_str(r#"{"pseudo": true}"#).unwrap();
        assert!(matches!(decoded, BuildProjectRequest::Pseudo(_)));
    }

    #[test]
    fn test_file_and_directory_builds() {
        assert_eq!(
            BuildProjectFileTranslationRequest::default()
                .validate()
                .unwrap_err()
                .to_string(),
            "targetLanguageId is required"
        );
        assert!(BuildProjectDirectoryTranslationRequest::default().validate().is_ok());
        let req = ExportTranslationRequest {
            target_language_id: "de".into(),
            skip_untranslated_files: Some(true),
            skip_untranslated_strings: Some(false),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_upload_translations_request() {
        let nil: Option<&UploadTranslationsRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let mut req = UploadTranslationsRequest::default();
        assert_eq!(req.validate().unwrap_err().to_string(), "storageId is required");
        req.storage_id = 34;
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "one of fileId or branchId is required"
        );
        req.file_id = Some(56);
        req.branch_id = Some(2);
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "fileId and branchId cannot be used in the same request"
        );
        req.branch_id = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_builds_list_options() {
        let opts = BuildsListOptions {
            branch_id: Some(4),
            list_options: ListOptions::default(),
        };
        assert_eq!(opts.values().0.encode(), "branchId=4");
        let nil: Option<&BuildsListOptions> = None;
        assert!(!nil.values().1);
    }
}
