//! String translations, approvals and votes

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// Vote direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteMark {
    Up,
    Down,
}

impl VoteMark {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl From<VoteMark> for String {
    fn from(mark: VoteMark) -> Self {
        mark.as_str().to_string()
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A translation approval
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Approval {
    pub id: u64,
    pub user: Option<TranslationUser>,
    pub translation_id: u64,
    pub string_id: u64,
    pub language_id: String,
    pub workflow_step_id: Option<u64>,
    pub created_at: Option<String>,
}

/// Author summary embedded in translation resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationUser {
    pub id: u64,
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// A translation suggestion of a string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Translation {
    pub id: u64,
    pub text: String,
    pub plural_category_name: Option<String>,
    pub user: Option<TranslationUser>,
    pub rating: i64,
    pub provider: Option<String>,
    pub is_pre_translated: bool,
    pub created_at: Option<String>,
}

/// Translation of a string as listed for a language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageTranslation {
    pub string_id: u64,
    pub content_type: String,
    pub translation_id: Option<u64>,
    /// Plain text, or plural forms for ICU/plural strings
    pub text: serde_json::Value,
    pub user: Option<TranslationUser>,
    pub created_at: Option<String>,
}

/// Result of aligning source and translated text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationAlignment {
    pub words: Vec<AlignedWord>,
}

/// One aligned word pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlignedWord {
    pub text: String,
    pub alignments: Vec<serde_json::Value>,
}

/// A vote for or against a translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vote {
    pub id: u64,
    pub user: Option<TranslationUser>,
    pub translation_id: u64,
    pub vote_type: String,
    pub mark: String,
    pub created_at: Option<String>,
}

// ============================================================================
// List options
// ============================================================================

/// Options for listing approvals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalsListOptions {
    pub order_by: Option<String>,
    pub file_id: Option<u64>,
    pub label_ids: Vec<u64>,
    pub exclude_label_ids: Vec<u64>,
    pub string_id: Option<u64>,
    pub language_id: Option<String>,
    pub translation_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for ApprovalsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_positive("fileId", self.file_id);
        v.add_joined("labelIds", &self.label_ids);
        v.add_joined("excludeLabelIds", &self.exclude_label_ids);
        v.add_positive("stringId", self.string_id);
        v.add_str("languageId", self.language_id.as_deref());
        v.add_positive("translationId", self.translation_id);
        v.finish()
    }
}

/// Options for listing translations of a language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTranslationsListOptions {
    pub order_by: Option<String>,
    pub string_ids: Vec<u64>,
    pub label_ids: Vec<u64>,
    pub file_id: Option<u64>,
    pub branch_id: Option<u64>,
    pub directory_id: Option<u64>,
    pub croql: Option<String>,
    /// 0 or 1
    pub denormalize_placeholders: Option<u8>,
    pub approved_only: Option<u8>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for LanguageTranslationsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_joined("stringIds", &self.string_ids);
        v.add_joined("labelIds", &self.label_ids);
        v.add_positive("fileId", self.file_id);
        v.add_positive("branchId", self.branch_id);
        v.add_positive("directoryId", self.directory_id);
        v.add_str("croql", self.croql.as_deref());
        v.add_flag("denormalizePlaceholders", self.denormalize_placeholders);
        v.add_flag("approvedOnly", self.approved_only);
        v.finish()
    }
}

/// Options for listing translations of a string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationsListOptions {
    pub string_id: Option<u64>,
    pub language_id: Option<String>,
    pub order_by: Option<String>,
    /// 0 or 1
    pub denormalize_placeholders: Option<u8>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for TranslationsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_positive("stringId", self.string_id);
        v.add_str("languageId", self.language_id.as_deref());
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_flag("denormalizePlaceholders", self.denormalize_placeholders);
        v.finish()
    }
}

/// Options for listing votes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VotesListOptions {
    pub string_id: Option<u64>,
    pub language_id: Option<String>,
    pub translation_id: Option<u64>,
    pub file_id: Option<u64>,
    pub label_ids: Vec<u64>,
    pub exclude_label_ids: Vec<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for VotesListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_positive("stringId", self.string_id);
        v.add_str("languageId", self.language_id.as_deref());
        v.add_positive("translationId", self.translation_id);
        v.add_positive("fileId", self.file_id);
        v.add_joined("labelIds", &self.label_ids);
        v.add_joined("excludeLabelIds", &self.exclude_label_ids);
        v.finish()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Approve a translation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalAddRequest {
    pub translation_id: u64,
}

impl Validate for ApprovalAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.translation_id == 0 {
            return Err(ValidationError::required("translationId"));
        }
        Ok(())
    }
}

/// Add a translation suggestion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationAddRequest {
    pub string_id: u64,
    pub language_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_to_tm: Option<bool>,
}

impl Validate for TranslationAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.string_id == 0 {
            return Err(ValidationError::required("stringId"));
        }
        if self.language_id.is_empty() {
            return Err(ValidationError::required("languageId"));
        }
        if self.text.is_empty() {
            return Err(ValidationError::required("text"));
        }
        Ok(())
    }
}

/// Align source text with its translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationAlignmentRequest {
    pub source_language_id: String,
    pub target_language_id: String,
    pub text: String,
}

impl Validate for TranslationAlignmentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.source_language_id.is_empty() {
            return Err(ValidationError::required("sourceLanguageId"));
        }
        if self.target_language_id.is_empty() {
            return Err(ValidationError::required("targetLanguageId"));
        }
        if self.text.is_empty() {
            return Err(ValidationError::required("text"));
        }
        Ok(())
    }
}

/// Vote for a translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteAddRequest {
    /// `up` or `down`, see [`VoteMark`]
    pub mark: String,
    pub translation_id: u64,
}

impl Validate for VoteAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.mark.is_empty() {
            return Err(ValidationError::required("mark"));
        }
        if self.mark != VoteMark::Up.as_str() && self.mark != VoteMark::Down.as_str() {
            return Err(ValidationError::invalid("vote type", &self.mark));
        }
        if self.translation_id == 0 {
            return Err(ValidationError::required("translationId"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_add_request() {
        let nil: Option<&VoteAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let req = VoteAddRequest {
            mark: "invalid".into(),
            translation_id: 1,
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "invalid vote type: \"invalid\"");

        assert_eq!(
            VoteAddRequest::default().validate().unwrap_err().to_string(),
            "mark is required"
        );

        let req = VoteAddRequest {
            mark: VoteMark::Up.into(),
            translation_id: 0,
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "translationId is required");

        let req = VoteAddRequest {
            mark: VoteMark::Down.into(),
            translation_id: 19069345,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_translation_add_request() {
        let nil: Option<&TranslationAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let mut req = TranslationAddRequest::default();
        assert_eq!(req.validate().unwrap_err().to_string(), "stringId is required");
        req.string_id = 35434;
        assert_eq!(req.validate().unwrap_err().to_string(), "languageId is required");
        req.language_id = "uk".into();
        assert_eq!(req.validate().unwrap_err().to_string(), "text is required");
        req.text = "Цю стрічку перекладено".into();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_alignment_and_approval() {
        let req = TranslationAlignmentRequest {
            source_language_id: "en".into(),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "targetLanguageId is required");
        assert_eq!(
            ApprovalAddRequest::default().validate().unwrap_err().to_string(),
            "translationId is required"
        );
        assert!(ApprovalAddRequest { translation_id: 1 }.validate().is_ok());
    }

    #[test]
    fn test_list_options() {
        let nil: Option<&LanguageTranslationsListOptions> = None;
        assert_eq!(nil.values(), (Values::new(), false));

        let opts = LanguageTranslationsListOptions {
            string_ids: vec![1, 2],
            file_id: Some(0),
            denormalize_placeholders: Some(1),
            approved_only: Some(5),
            ..Default::default()
        };
        let (v, ok) = opts.values();
        assert!(ok);
        assert_eq!(v.encode(), "denormalizePlaceholders=1&stringIds=1%2C2");

        let opts = VotesListOptions {
            translation_id: Some(9),
            label_ids: vec![3],
            ..Default::default()
        };
        assert_eq!(opts.values().0.encode(), "labelIds=3&translationId=9");
    }

    #[test]
    fn test_language_translation_deserialize() {
        let json = r#"{
            "stringId": 12,
            "contentType": "text/plain",
            "translationId": 190695,
            "text": "Цю стрічку перекладено",
            "user": {"id": 19, "username": "john_doe"}
        }"#;
        let t: LanguageTranslation = serde_json::from_str(json).unwrap();
        assert_eq!(t.translation_id, Some(190695));
        assert_eq!(t.user.unwrap().username, "john_doe");
    }
}
