//! File import/export options and project file-format settings
//!
//! The API accepts a different options object depending on the file type
//! (or, for project settings, the format). Each shape is a variant of a
//! closed enum; the enum serializes as the bare object and delegates
//! validation to the variant.
//!
//! Untagged decoding picks the first variant whose fields are a superset of
//! the received keys, so a response decoded back may land on a different
//! but wire-identical variant.

use crate::error::ValidationError;
use crate::validate::{in_range, one_of_opt, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const EXPORT_QUOTES: &[&str] = &["single", "double"];

fn check_segmentation(
    content_segmentation: Option<bool>,
    srx_storage_id: Option<u64>,
) -> Result<(), ValidationError> {
    if srx_storage_id.is_some_and(|id| id > 0) && content_segmentation != Some(true) {
        return Err(ValidationError::field(
            "srxStorageId can be used only when contentSegmentation is enabled",
        ));
    }
    Ok(())
}

fn check_property_escapes(
    escape_quotes: Option<u8>,
    escape_special_characters: Option<u8>,
) -> Result<(), ValidationError> {
    in_range("escapeQuotes", escape_quotes, 0, 3)?;
    in_range("escapeSpecialCharacters", escape_special_characters, 0, 1)
}

// ============================================================================
// Import options
// ============================================================================

/// Import options for spreadsheet files (csv, xlsx)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpreadsheetImportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_contains_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_translations: Option<bool>,
    /// Column index per column role (`identifier`, `sourcePhrase`, language ids, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scheme: BTreeMap<String, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
}

impl Validate for SpreadsheetImportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// Import options for XML files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct XmlImportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_attributes: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translatable_elements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
}

impl Validate for XmlImportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// Import options for DOCX/PPTX/XLSX documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocxImportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_tags_aggressively: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hidden_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hyperlink_urls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hidden_rows_and_columns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_hidden_slides: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
}

impl Validate for DocxImportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// Import options for HTML files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HtmlImportOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_elements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
}

impl Validate for HtmlImportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// Import options for HTML files with front matter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HtmlFrontMatterImportOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_elements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_front_matter_elements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
}

impl Validate for HtmlFrontMatterImportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// Import options for MDX (v2) files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MdxImportOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_front_matter_elements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_code_blocks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
}

impl Validate for MdxImportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// Import options for every other file type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OtherImportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
}

impl Validate for OtherImportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// File `importOptions`, shaped by the file type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileImportOptions {
    Spreadsheet(SpreadsheetImportOptions),
    Xml(XmlImportOptions),
    Docx(DocxImportOptions),
    HtmlFrontMatter(HtmlFrontMatterImportOptions),
    Html(HtmlImportOptions),
    Mdx(MdxImportOptions),
    Other(OtherImportOptions),
}

impl Validate for FileImportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Spreadsheet(o) => o.validate(),
            Self::Xml(o) => o.validate(),
            Self::Docx(o) => o.validate(),
            Self::HtmlFrontMatter(o) => o.validate(),
            Self::Html(o) => o.validate(),
            Self::Mdx(o) => o.validate(),
            Self::Other(o) => o.validate(),
        }
    }
}

// ============================================================================
// Export options
// ============================================================================

/// Export options for `.properties` files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropertyExportOptions {
    /// 0 do not escape, 1 escape single quote with another, 2 backslash, 3 double the quote in variables only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_quotes: Option<u8>,
    /// 0 do not escape, 1 escape special characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_special_characters: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

impl Validate for PropertyExportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        check_property_escapes(self.escape_quotes, self.escape_special_characters)
    }
}

/// Export options for JavaScript files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JavaScriptExportOptions {
    /// `single` or `double`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_quotes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

impl Validate for JavaScriptExportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of_opt("exportQuotes", self.export_quotes.as_deref(), EXPORT_QUOTES)
    }
}

/// Export options for Markdown files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MarkdownExportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_markdown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

impl Validate for MarkdownExportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Export options for every other file type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneralExportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

impl Validate for GeneralExportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// File `exportOptions`, shaped by the file type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileExportOptions {
    General(GeneralExportOptions),
    Property(PropertyExportOptions),
    JavaScript(JavaScriptExportOptions),
    Markdown(MarkdownExportOptions),
}

impl Validate for FileExportOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::General(o) => o.validate(),
            Self::Property(o) => o.validate(),
            Self::JavaScript(o) => o.validate(),
            Self::Markdown(o) => o.validate(),
        }
    }
}

// ============================================================================
// Project file-format settings
// ============================================================================

/// Project-level settings for `.properties` files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropertyFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_quotes: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_special_characters: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

impl Validate for PropertyFileFormatSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        check_property_escapes(self.escape_quotes, self.escape_special_characters)
    }
}

/// Project-level settings for XML files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct XmlFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_attributes: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translatable_elements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

impl Validate for XmlFileFormatSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// Project-level settings for JavaScript files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JavaScriptFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_quotes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

impl Validate for JavaScriptFileFormatSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of_opt("exportQuotes", self.export_quotes.as_deref(), EXPORT_QUOTES)
    }
}

/// Project-level settings for DOCX documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocxFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_tags_aggressively: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hidden_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hyperlink_urls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hidden_rows_and_columns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_hidden_slides: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

impl Validate for DocxFileFormatSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// Project-level settings for every other format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OtherFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

impl Validate for OtherFileFormatSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        check_segmentation(self.content_segmentation, self.srx_storage_id)
    }
}

/// Project file-format `settings`, shaped by the format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileFormatSettings {
    Property(PropertyFileFormatSettings),
    JavaScript(JavaScriptFileFormatSettings),
    Xml(XmlFileFormatSettings),
    Docx(DocxFileFormatSettings),
    Other(OtherFileFormatSettings),
}

impl Validate for FileFormatSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Property(s) => s.validate(),
            Self::JavaScript(s) => s.validate(),
            Self::Xml(s) => s.validate(),
            Self::Docx(s) => s.validate(),
            Self::Other(s) => s.validate(),
        }
    }
}
