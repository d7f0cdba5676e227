//! Machine translation engines

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A configured MT engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MachineTranslation {
    pub id: u64,
    pub group_id: u64,
    pub name: String,
    /// e.g. `google`, `deepl`, `microsoft`, `amazon`
    #[serde(rename = "type")]
    pub r#type: String,
    pub credentials: serde_json::Value,
    pub project_ids: Vec<u64>,
    pub supported_languages_ids: Vec<String>,
    pub supported_languages_pairs: serde_json::Value,
    pub enabled_languages_ids: Vec<String>,
    pub enabled_project_ids: Vec<u64>,
    pub is_enabled: bool,
}

/// Result of translating strings through an engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MtTranslation {
    pub source_language_id: String,
    pub target_language_id: String,
    pub strings: Vec<String>,
    pub translations: Vec<String>,
}

/// Options for listing MT engines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MtListOptions {
    /// `Some(0)` lists engines outside any group
    pub group_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for MtListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_some("groupId", self.group_id);
        v.finish()
    }
}

/// Engine credentials; the accepted keys depend on the engine type
pub type MtCredentials = serde_json::Map<String, serde_json::Value>;

/// Add an MT engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MtAddRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub credentials: MtCredentials,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_language_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_project_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

impl Validate for MtAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.r#type.is_empty() {
            return Err(ValidationError::required("type"));
        }
        if self.credentials.is_empty() {
            return Err(ValidationError::required("credentials"));
        }
        Ok(())
    }
}

/// Translate strings through an engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateViaMtRequest {
    pub target_language_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_id: Option<String>,
    /// `crowdin` or `engine`; replaces `sourceLanguageId`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_recognition_provider: Option<String>,
    pub strings: Vec<String>,
}

impl Validate for TranslateViaMtRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.target_language_id.is_empty() {
            return Err(ValidationError::required("targetLanguageId"));
        }
        let provider = self.language_recognition_provider.as_deref().is_some_and(|p| !p.is_empty());
        let source = self.source_language_id.as_deref().is_some_and(|s| !s.is_empty());
        if provider && source {
            return Err(ValidationError::conflict("languageRecognitionProvider", "sourceLanguageId"));
        }
        if self.strings.is_empty() {
            return Err(ValidationError::required("strings"));
        }
        Ok(())
    }
}
