//! Labels for strings and screenshots

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A project label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Label {
    pub id: u64,
    pub title: String,
    pub is_system: bool,
}

/// Options for listing labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelsListOptions {
    pub order_by: Option<String>,
    /// 1 for system labels only, 0 for custom labels only
    pub is_system: Option<u8>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for LabelsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_flag("isSystem", self.is_system);
        v.finish()
    }
}

/// Add a label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAddRequest {
    pub title: String,
}

impl Validate for LabelAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::required("title"));
        }
        Ok(())
    }
}

/// Assign a label to strings, or unassign it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelToStringsRequest {
    pub string_ids: Vec<u64>,
}

impl Validate for LabelToStringsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.string_ids.is_empty() {
            return Err(ValidationError::required("stringIds"));
        }
        Ok(())
    }
}

/// Assign a label to screenshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelToScreenshotsRequest {
    pub screenshot_ids: Vec<u64>,
}

impl Validate for LabelToScreenshotsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.screenshot_ids.is_empty() {
            return Err(ValidationError::required("screenshotIds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_tri_state() {
        for (flag, expected) in [(Some(0), "isSystem=0"), (Some(1), "isSystem=1"), (Some(2), ""), (None, "")] {
            let opts = LabelsListOptions {
                is_system: flag,
                ..Default::default()
            };
            assert_eq!(opts.values().0.encode(), expected);
        }
    }

    #[test]
    fn test_requests() {
        let nil: Option<&LabelAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));
        assert_eq!(
            LabelAddRequest::default().validate().unwrap_err().to_string(),
            "title is required"
        );
        assert_eq!(
            LabelToStringsRequest::default().validate().unwrap_err().to_string(),
            "stringIds is required"
        );
        assert_eq!(
            LabelToScreenshotsRequest::default().validate().unwrap_err().to_string(),
            "screenshotIds is required"
        );

        let req = LabelToStringsRequest {
            string_ids: vec![1, 2],
        };
        assert!(req.validate().is_ok());
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"stringIds":[1,2]}"#);
    }
}
