//! Projects, file-format settings and strings-exporter settings

use crate::error::ValidationError;
use crate::model::file_formats::FileFormatSettings;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::serde_helpers::map_or_empty_array;
use crate::validate::{in_range, nested, one_of_opt, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const LANGUAGE_ACCESS_POLICIES: &[&str] = &["open", "moderate"];
const VISIBILITIES: &[&str] = &["open", "private"];

/// Project type: file based or string based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    FilesBased,
    StringsBased,
}

impl ProjectType {
    /// Wire value
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::FilesBased => 0,
            Self::StringsBased => 1,
        }
    }
}

impl From<ProjectType> for u8 {
    fn from(t: ProjectType) -> Self {
        t.as_u8()
    }
}

/// Per-language code overrides: language id to placeholder to value
pub type LanguageMapping = BTreeMap<String, BTreeMap<String, String>>;

// ============================================================================
// Entities
// ============================================================================

/// A project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: u64,
    #[serde(rename = "type")]
    pub r#type: u8,
    pub user_id: u64,
    pub source_language_id: String,
    pub target_language_ids: Vec<String>,
    pub language_access_policy: Option<String>,
    pub name: String,
    pub cname: Option<String>,
    pub identifier: String,
    pub description: Option<String>,
    pub visibility: Option<String>,
    pub logo: Option<String>,
    pub public_downloads: bool,
    pub group_id: Option<u64>,
    pub web_url: Option<String>,
    pub is_external: bool,
    pub is_suspended: bool,
    pub has_crowdsourcing: bool,
    pub translate_duplicates: Option<u8>,
    pub tags_detection: Option<u8>,
    pub glossary_access: bool,
    pub is_mt_allowed: bool,
    pub auto_substitution: bool,
    pub auto_translate_dialects: bool,
    pub skip_untranslated_strings: bool,
    pub skip_untranslated_files: bool,
    pub export_approved_only: bool,
    pub export_with_min_approvals_count: Option<u32>,
    pub qa_check_is_active: bool,
    pub in_context: bool,
    pub in_context_pseudo_language_id: Option<String>,
    pub normalize_placeholder: bool,
    pub save_meta_info_in_source: bool,
    pub use_global_tm: bool,
    /// Arrives as `[]` when no mapping is configured
    #[serde(deserialize_with = "map_or_empty_array")]
    pub language_mapping: LanguageMapping,
    pub notification_settings: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub last_activity: Option<String>,
}

/// File-format settings configured on a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectFileFormatSettings {
    pub id: u64,
    pub name: String,
    pub format: String,
    pub extensions: Vec<String>,
    /// Shape depends on `format`
    pub settings: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Strings-exporter settings configured on a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectStringsExporterSettings {
    pub id: u64,
    pub format: String,
    pub settings: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// ============================================================================
// List options
// ============================================================================

/// Options for listing projects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsListOptions {
    pub order_by: Option<String>,
    pub user_id: Option<u64>,
    /// `Some(0)` lists projects of the root group
    pub group_id: Option<u64>,
    /// 0 or 1
    pub has_manager_access: Option<u8>,
    /// 0 files based, 1 strings based
    pub r#type: Option<u8>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for ProjectsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_positive("userId", self.user_id);
        v.add_some("groupId", self.group_id);
        v.add_flag("hasManagerAccess", self.has_manager_access);
        v.add_flag("type", self.r#type);
        v.finish()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Create a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsAddRequest {
    pub name: String,
    pub source_language_id: String,
    /// See [`ProjectType`]
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_language_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mt_engine_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `open` or `moderate`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_access_policy: Option<String>,
    /// `open` or `private`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_duplicates: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_detection: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mt_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_substitution: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_translate_dialects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_downloads: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_placeholder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_meta_info_in_source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_global_tm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_context: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_context_pseudo_language_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_check_is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub language_mapping: LanguageMapping,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<serde_json::Value>,
}

impl Validate for ProjectsAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.source_language_id.is_empty() {
            return Err(ValidationError::required("sourceLanguageId"));
        }
        in_range("type", self.r#type, 0, 1)?;
        one_of_opt(
            "languageAccessPolicy",
            self.language_access_policy.as_deref(),
            LANGUAGE_ACCESS_POLICIES,
        )?;
        one_of_opt("visibility", self.visibility.as_deref(), VISIBILITIES)
    }
}

/// Add file-format settings to a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsAddFileFormatSettingsRequest {
    /// Target format, e.g. `properties`, `xml`, `docx`
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<FileFormatSettings>,
}

impl Validate for ProjectsAddFileFormatSettingsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.format.is_empty() {
            return Err(ValidationError::required("format"));
        }
        nested("settings", self.settings.as_ref())
    }
}

/// Android strings export settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidExporterSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_placeholders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cdata_for_strings_with_tags: Option<bool>,
}

/// macOS strings export settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacOsxExporterSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_placeholders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_line_breaks: Option<bool>,
}

/// XLIFF strings export settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XliffExporterSettings {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub language_pair_mapping: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_source_to_empty_target: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_translator_comment: Option<bool>,
}

/// Strings-exporter settings keyed by `format`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "settings", rename_all = "lowercase")]
pub enum StringsExporterSettings {
    Android(AndroidExporterSettings),
    #[serde(rename = "macosx")]
    MacOsx(MacOsxExporterSettings),
    Xliff(XliffExporterSettings),
}

impl Validate for StringsExporterSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Add or edit strings-exporter settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsStringsExporterSettingsRequest {
    /// Renders as `{"format": ..., "settings": {...}}`
    #[serde(flatten)]
    pub settings: Option<StringsExporterSettings>,
}

impl Validate for ProjectsStringsExporterSettingsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        nested("settings", self.settings.as_ref())
    }
}
