//! Proofreading corrections of source strings

use crate::error::ValidationError;
use crate::model::string_translations::TranslationUser;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A correction suggested for a source string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Correction {
    pub id: u64,
    pub text: String,
    pub plural_category_name: Option<String>,
    pub user: Option<TranslationUser>,
    pub created_at: Option<String>,
}

/// Options for listing corrections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionsListOptions {
    pub string_id: Option<u64>,
    pub order_by: Option<String>,
    /// 1 to show placeholders in their original form
    pub denormalize_placeholders: Option<u8>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for CorrectionsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_positive("stringId", self.string_id);
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_flag("denormalizePlaceholders", self.denormalize_placeholders);
        v.finish()
    }
}

/// Add a correction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionAddRequest {
    pub string_id: u64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_category_name: Option<String>,
}

impl Validate for CorrectionAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.string_id == 0 {
            return Err(ValidationError::required("stringId"));
        }
        if self.text.is_empty() {
            return Err(ValidationError::required("text"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options() {
        let opts = CorrectionsListOptions {
            string_id: Some(35),
            order_by: Some("createdAt desc".into()),
            denormalize_placeholders: Some(1),
            ..Default::default()
        };
        assert_eq!(
            opts.values().0.encode(),
            "denormalizePlaceholders=1&orderBy=createdAt+desc&stringId=35"
        );
    }

    #[test]
    fn test_correction_add_request() {
        let nil: Option<&CorrectionAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let mut req = CorrectionAddRequest::default();
        assert_eq!(req.validate().unwrap_err().to_string(), "stringId is required");
        req.string_id = 35;
        assert_eq!(req.validate().unwrap_err().to_string(), "text is required");
        req.text = "Download now".into();
        assert!(req.validate().is_ok());
    }
}
