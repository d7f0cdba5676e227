//! Reports, report settings templates and report archives
//!
//! A report request names the report and carries a schema whose shape
//! depends on that name. [`ReportSchema`] and [`GroupReportSchema`] render as
//! `{"name": "...", "schema": {...}}`.

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::{nested, one_of, one_of_opt, Validate};
use serde::{Deserialize, Serialize};

const REPORT_FORMATS: &[&str] = &["xlsx", "csv", "json"];
const REPORT_UNITS: &[&str] = &["strings", "words", "chars", "chars_with_spaces"];
const CONTRIBUTION_MODES: &[&str] = &["translations", "approvals", "votes"];

/// Counting unit of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportUnit {
    Strings,
    Words,
    Chars,
    CharsWithSpaces,
}

impl ReportUnit {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strings => "strings",
            Self::Words => "words",
            Self::Chars => "chars",
            Self::CharsWithSpaces => "chars_with_spaces",
        }
    }
}

impl From<ReportUnit> for String {
    fn from(unit: ReportUnit) -> Self {
        unit.as_str().to_string()
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Status of a report generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportStatus {
    pub identifier: String,
    pub status: String,
    pub progress: u8,
    pub attributes: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

/// A saved report settings template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSettingsTemplate {
    pub id: u64,
    pub name: String,
    pub currency: String,
    pub unit: String,
    pub mode: Option<String>,
    pub config: ReportSettingsTemplateConfig,
    pub is_public: bool,
    pub is_global: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A generated report kept for later download
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportArchive {
    pub id: u64,
    pub scope_type: String,
    pub scope_id: u64,
    pub user_id: u64,
    pub name: String,
    pub web_url: Option<String>,
    pub scheme: serde_json::Value,
    pub created_at: Option<String>,
}

// ============================================================================
// Rates
// ============================================================================

/// Base rates per word/string
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseRates {
    pub full_translation: f64,
    pub proofread: f64,
}

/// Rates overriding the base for some languages and users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndividualRate {
    pub language_ids: Vec<String>,
    pub user_ids: Vec<u64>,
    pub full_translation: f64,
    pub proofread: f64,
}

/// Discount for one match type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateScheme {
    /// e.g. `perfect`, `100`, `99-82`
    pub match_type: String,
    pub price: f64,
}

/// Discounts applied to matches from each source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetRateSchemes {
    pub tm_match: Vec<RateScheme>,
    pub mt_match: Vec<RateScheme>,
    pub suggestion_match: Vec<RateScheme>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ai_match: Vec<RateScheme>,
}

/// Rates of a settings template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSettingsTemplateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_rates: Option<BaseRates>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub individual_rates: Vec<IndividualRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_rate_schemes: Option<NetRateSchemes>,
}

// ============================================================================
// Report schemas
// ============================================================================

/// Schema of post-editing cost reports (estimation and actual costs)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostsPostEditingSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_rates: Option<BaseRates>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub individual_rates: Vec<IndividualRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_rate_schemes: Option<NetRateSchemes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculate_internal_matches: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_pre_translated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Validate for CostsPostEditingSchema {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of_opt("format", self.format.as_deref(), REPORT_FORMATS)
    }
}

/// Schema of the top-members report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMembersSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Validate for TopMembersSchema {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of_opt("format", self.format.as_deref(), REPORT_FORMATS)
    }
}

/// Schema of the contribution raw data report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRawDataSchema {
    /// `translations`, `approvals` or `votes`
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Validate for ContributionRawDataSchema {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.mode.is_empty() {
            return Err(ValidationError::required("mode"));
        }
        one_of("mode", &self.mode, CONTRIBUTION_MODES)?;
        one_of_opt("format", self.format.as_deref(), REPORT_FORMATS)
    }
}

/// Schema of the pre-translate efficiency report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreTranslateEfficiencySchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_editing_categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Validate for PreTranslateEfficiencySchema {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of_opt("format", self.format.as_deref(), REPORT_FORMATS)
    }
}

/// Project report, keyed by `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "schema")]
pub enum ReportSchema {
    #[serde(rename = "costs-estimation-pe")]
    CostsEstimationPostEditing(CostsPostEditingSchema),
    #[serde(rename = "translation-costs-pe")]
    TranslationCostsPostEditing(CostsPostEditingSchema),
    #[serde(rename = "top-members")]
    TopMembers(TopMembersSchema),
    #[serde(rename = "contribution-raw-data")]
    ContributionRawData(ContributionRawDataSchema),
    #[serde(rename = "pre-translate-efficiency")]
    PreTranslateEfficiency(PreTranslateEfficiencySchema),
}

impl Validate for ReportSchema {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::CostsEstimationPostEditing(s) | Self::TranslationCostsPostEditing(s) => s.validate(),
            Self::TopMembers(s) => s.validate(),
            Self::ContributionRawData(s) => s.validate(),
            Self::PreTranslateEfficiency(s) => s.validate(),
        }
    }
}

/// Group or organization report, keyed by `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "schema")]
pub enum GroupReportSchema {
    #[serde(rename = "group-translation-costs-pe")]
    GroupTranslationCostsPostEditing(GroupCostsSchema),
    #[serde(rename = "group-top-members")]
    GroupTopMembers(GroupTopMembersSchema),
}

impl Validate for GroupReportSchema {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::GroupTranslationCostsPostEditing(s) => s.validate(),
            Self::GroupTopMembers(s) => s.validate(),
        }
    }
}

/// Schema of the group post-editing costs report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCostsSchema {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_rates: Option<BaseRates>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub individual_rates: Vec<IndividualRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_rate_schemes: Option<NetRateSchemes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Validate for GroupCostsSchema {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of_opt("format", self.format.as_deref(), REPORT_FORMATS)
    }
}

/// Schema of the group top-members report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTopMembersSchema {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Validate for GroupTopMembersSchema {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of_opt("format", self.format.as_deref(), REPORT_FORMATS)
    }
}

// ============================================================================
// List options
// ============================================================================

/// Options for listing report archives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportArchivesListOptions {
    /// `project`, `group` or `organization`
    pub scope_type: Option<String>,
    pub scope_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for ReportArchivesListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("scopeType", self.scope_type.as_deref());
        v.add_positive("scopeId", self.scope_id);
        v.finish()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Generate a project report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportGenerateRequest {
    #[serde(flatten)]
    pub schema: Option<ReportSchema>,
}

impl Validate for ReportGenerateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        nested("schema", self.schema.as_ref())
    }
}

/// Generate a group or organization report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupReportGenerateRequest {
    #[serde(flatten)]
    pub schema: Option<GroupReportSchema>,
}

impl Validate for GroupReportGenerateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        nested("schema", self.schema.as_ref())
    }
}

/// Save a report settings template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSettingsTemplateAddRequest {
    pub name: String,
    pub currency: String,
    /// See [`ReportUnit`]
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ReportSettingsTemplateConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_global: Option<bool>,
}

impl Validate for ReportSettingsTemplateAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.currency.is_empty() {
            return Err(ValidationError::required("currency"));
        }
        if self.unit.is_empty() {
            return Err(ValidationError::required("unit"));
        }
        one_of("unit", &self.unit, REPORT_UNITS)?;
        let Some(config) = &self.config else {
            return Err(ValidationError::required("config"));
        };
        if config.base_rates.is_none() {
            return Err(ValidationError::required("config.baseRates"));
        }
        if config.net_rate_schemes.is_none() {
            return Err(ValidationError::required("config.netRateSchemes"));
        }
        Ok(())
    }
}
