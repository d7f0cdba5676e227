//! Over-the-air content delivery distributions

use crate::error::ValidationError;
use crate::validate::{one_of, Validate};
use serde::{Deserialize, Serialize};

const EXPORT_MODES: &[&str] = &["default", "bundle"];

/// How a distribution selects its content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Files, addressed by `fileIds`
    #[default]
    Default,
    /// Bundles, addressed by `bundleIds`
    Bundle,
}

impl ExportMode {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bundle => "bundle",
        }
    }
}

impl From<ExportMode> for String {
    fn from(mode: ExportMode) -> Self {
        mode.as_str().to_string()
    }
}

/// A distribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Distribution {
    pub hash: String,
    pub manifest_url: Option<String>,
    pub name: String,
    pub export_mode: String,
    pub file_ids: Vec<u64>,
    pub bundle_ids: Vec<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Status of a distribution release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistributionRelease {
    pub status: String,
    pub progress: u8,
    pub current_language_id: Option<String>,
    pub current_file_id: Option<u64>,
    pub date: Option<String>,
}

/// Add a distribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionAddRequest {
    pub name: String,
    /// See [`ExportMode`], `default` when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundle_ids: Vec<u64>,
}

impl Validate for DistributionAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        let mode = self
            .export_mode
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(ExportMode::Default.as_str());
        one_of("exportMode", mode, EXPORT_MODES)?;
        if mode == ExportMode::Default.as_str() && self.file_ids.is_empty() {
            return Err(ValidationError::required("fileIds"));
        }
        if mode == ExportMode::Bundle.as_str() && self.bundle_ids.is_empty() {
            return Err(ValidationError::required("bundleIds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_modes() {
        let nil: Option<&DistributionAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        assert_eq!(
            DistributionAddRequest::default().validate().unwrap_err().to_string(),
            "name is required"
        );

        let mut req = DistributionAddRequest {
            name: "Release 1.0".into(),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "fileIds is required");
        req.file_ids = vec![1, 2];
        assert!(req.validate().is_ok());

        req.export_mode = Some(ExportMode::Bundle.into());
        assert_eq!(req.validate().unwrap_err().to_string(), "bundleIds is required");
        req.bundle_ids = vec![5];
        assert!(req.validate().is_ok());

        req.export_mode = Some("all".into());
        assert_eq!(req.validate().unwrap_err().to_string(), "invalid exportMode: \"all\"");
    }

    #[test]
    fn test_release_deserialize() {
        let json = r#"{"status": "inProgress", "progress": 40, "currentLanguageId": "uk", "currentFileId": 2}"#;
        let release: DistributionRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.progress, 40);
        assert_eq!(release.current_file_id, Some(2));
    }
}
