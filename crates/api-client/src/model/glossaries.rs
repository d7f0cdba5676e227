//! Glossaries, terms and concepts

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::{one_of_opt, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const EXPORT_FORMATS: &[&str] = &["tbx", "tbx_v3", "csv", "xlsx"];
const TERM_STATUSES: &[&str] = &["preferred", "admitted", "not recommended", "obsolete"];

/// Glossary export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlossaryFormat {
    Tbx,
    TbxV3,
    Csv,
    Xlsx,
}

impl GlossaryFormat {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tbx => "tbx",
            Self::TbxV3 => "tbx_v3",
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

impl From<GlossaryFormat> for String {
    fn from(format: GlossaryFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Usage status of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermStatus {
    #[serde(rename = "preferred")]
    Preferred,
    #[serde(rename = "admitted")]
    Admitted,
    #[serde(rename = "not recommended")]
    NotRecommended,
    #[serde(rename = "obsolete")]
    Obsolete,
}

impl TermStatus {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preferred => "preferred",
            Self::Admitted => "admitted",
            Self::NotRecommended => "not recommended",
            Self::Obsolete => "obsolete",
        }
    }
}

impl From<TermStatus> for String {
    fn from(status: TermStatus) -> Self {
        status.as_str().to_string()
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A glossary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Glossary {
    pub id: u64,
    pub name: String,
    pub group_id: Option<u64>,
    pub user_id: u64,
    pub terms: u64,
    pub language_id: String,
    pub language_ids: Vec<String>,
    pub default_project_ids: Vec<u64>,
    pub project_ids: Vec<u64>,
    pub web_url: Option<String>,
    pub created_at: Option<String>,
}

/// A glossary term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Term {
    pub id: u64,
    pub user_id: u64,
    pub glossary_id: u64,
    pub language_id: String,
    pub text: String,
    pub description: Option<String>,
    pub part_of_speech: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub gender: Option<String>,
    pub note: Option<String>,
    pub url: Option<String>,
    pub concept_id: Option<u64>,
    pub lemma: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A glossary concept grouping terms across languages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Concept {
    pub id: u64,
    pub user_id: u64,
    pub glossary_id: u64,
    pub subject: Option<String>,
    pub definition: Option<String>,
    pub translatable: bool,
    pub note: Option<String>,
    pub url: Option<String>,
    pub figure: Option<String>,
    pub languages_details: Vec<serde_json::Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Status of a glossary import or export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlossaryOperationStatus {
    pub identifier: String,
    pub status: String,
    pub progress: u8,
    pub attributes: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

/// One concordance search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlossaryConcordanceMatch {
    pub glossary: Glossary,
    pub concept: Concept,
    pub source_terms: Vec<Term>,
    pub target_terms: Vec<Term>,
}

// ============================================================================
// List options
// ============================================================================

/// Options for listing glossaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossariesListOptions {
    pub order_by: Option<String>,
    pub user_id: Option<u64>,
    /// `Some(0)` lists glossaries of the root group
    pub group_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for GlossariesListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_positive("userId", self.user_id);
        v.add_some("groupId", self.group_id);
        v.finish()
    }
}

/// Options for listing terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermsListOptions {
    pub order_by: Option<String>,
    pub user_id: Option<u64>,
    pub language_id: Option<String>,
    pub concept_id: Option<u64>,
    pub croql: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for TermsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_positive("userId", self.user_id);
        v.add_str("languageId", self.language_id.as_deref());
        v.add_positive("conceptId", self.concept_id);
        v.add_str("croql", self.croql.as_deref());
        v.finish()
    }
}

/// Options for listing concepts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptsListOptions {
    pub order_by: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for ConceptsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.finish()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Add a glossary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryAddRequest {
    pub name: String,
    pub language_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
}

impl Validate for GlossaryAddRequest {
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

/// Export a glossary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryExportRequest {
    /// See [`GlossaryFormat`], `tbx` when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub export_fields: Vec<String>,
}

impl Validate for GlossaryExportRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of_opt("format", self.format.as_deref(), EXPORT_FORMATS)
    }
}

/// Import terms into a glossary from a storage upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryImportRequest {
    pub storage_id: u64,
    /// Column index per field, for csv/xlsx
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scheme: BTreeMap<String, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_contains_header: Option<bool>,
}

impl Validate for GlossaryImportRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_id == 0 {
            return Err(ValidationError::required("storageId"));
        }
        Ok(())
    }
}

/// Search glossary terms matching expressions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryConcordanceSearchRequest {
    pub source_language_id: String,
    pub target_language_id: String,
    pub expressions: Vec<String>,
}

impl Validate for GlossaryConcordanceSearchRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.source_language_id.is_empty() {
            return Err(ValidationError::required("sourceLanguageId"));
        }
        if self.target_language_id.is_empty() {
            return Err(ValidationError::required("targetLanguageId"));
        }
        if self.expressions.is_empty() {
            return Err(ValidationError::required("expressions"));
        }
        Ok(())
    }
}

/// Add a term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermAddRequest {
    pub language_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// See [`TermStatus`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_of_term_id: Option<u64>,
}

impl Validate for TermAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.language_id.is_empty() {
            return Err(ValidationError::required("languageId"));
        }
        if self.text.is_empty() {
            return Err(ValidationError::required("text"));
        }
        one_of_opt("status", self.status.as_deref(), TERM_STATUSES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_id_zero_is_emitted() {
        let opts = GlossariesListOptions {
            group_id: Some(0),
            ..Default::default()
        };
        let (v, ok) = opts.values();
        assert!(ok);
        assert_eq!(v.encode(), "groupId=0");

        let nil: Option<&GlossariesListOptions> = None;
        assert_eq!(nil.values(), (Values::new(), false));
        assert!(!GlossariesListOptions::default().values().1);
    }

    #[test]
    fn test_glossaries_list_full() {
        let opts = GlossariesListOptions {
            order_by: Some("createdAt desc,name".into()),
            user_id: Some(1),
            group_id: Some(2),
            list_options: ListOptions::new(10, 5),
        };
        assert_eq!(
            opts.values().0.encode(),
            "groupId=2&limit=10&offset=5&orderBy=createdAt+desc%2Cname&userId=1"
        );
    }

    #[test]
    fn test_glossary_add_request() {
        let nil: Option<&GlossaryAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let req = GlossaryAddRequest {
            name: "Be My Eyes iOS's Glossary".into(),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "languageId is required");
    }

    #[test]
    fn test_export_format() {
        assert!(GlossaryExportRequest::default().validate().is_ok());
        let req = GlossaryExportRequest {
            format: Some(GlossaryFormat::TbxV3.into()),
            export_fields: vec!["term".into(), "description".into()],
        };
        assert!(req.validate().is_ok());
        let req = GlossaryExportRequest {
            format: Some("pdf".into()),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "invalid format: \"pdf\"");
    }

    #[test]
    fn test_import_and_concordance() {
        assert_eq!(
            GlossaryImportRequest::default().validate().unwrap_err().to_string(),
            "storageId is required"
        );
        let req = GlossaryConcordanceSearchRequest {
            source_language_id: "en".into(),
            target_language_id: "de".into(),
            expressions: vec![],
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "expressions is required");
    }

    #[test]
    fn test_term_add_request() {
        let mut req = TermAddRequest {
            language_id: "en".into(),
            text: "Be My Eyes".into(),
            status: Some(TermStatus::NotRecommended.into()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&req).unwrap()["status"],
            serde_json::json!("not recommended")
        );

        req.status = Some("deprecated".into());
        assert_eq!(req.validate().unwrap_err().to_string(), "invalid status: \"deprecated\"");

        req.text = String::new();
        assert_eq!(req.validate().unwrap_err().to_string(), "text is required");
    }
}
