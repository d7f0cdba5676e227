//! Application installations and application data

use crate::error::ValidationError;
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// An installed application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationInstallation {
    pub identifier: String,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub base_url: Option<String>,
    pub manifest_url: Option<String>,
    pub modules: Vec<serde_json::Value>,
    pub scopes: Vec<String>,
    pub permissions: Option<ApplicationPermissions>,
    pub default_permissions: serde_json::Value,
    pub limit_reached: bool,
    pub created_at: Option<String>,
}

/// Who may use an application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PermissionScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<PermissionScope>,
}

/// One permission dimension: a mode plus explicit ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionScope {
    /// e.g. `owner`, `managers`, `all`, `guests`, `restricted`, `own`
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<u64>,
}

/// Install an application from its manifest URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInstallRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<ApplicationPermissions>,
}

impl Validate for ApplicationInstallRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::required("url"));
        }
        Ok(())
    }
}

/// Arbitrary JSON stored by an application; sent as the bare object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDataRequest {
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Validate for ApplicationDataRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.data.is_empty() {
            return Err(ValidationError::required("data"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_request() {
        let nil: Option<&ApplicationInstallRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));
        assert_eq!(
            ApplicationInstallRequest::default().validate().unwrap_err().to_string(),
            "url is required"
        );

        let req = ApplicationInstallRequest {
            url: "https://localhost.dev/crowdin.json".into(),
            permissions: Some(ApplicationPermissions {
                user: Some(PermissionScope {
                    value: "restricted".into(),
                    ids: vec![1],
                }),
                project: None,
            }),
        };
        assert!(req.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "url": "https://localhost.dev/crowdin.json",
                "permissions": {"user": {"value": "restricted", "ids": [1]}}
            })
        );
    }

    #[test]
    fn test_data_request_is_bare_object() {
        let nil: Option<&ApplicationDataRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));
        assert_eq!(
            ApplicationDataRequest::default().validate().unwrap_err().to_string(),
            "data is required"
        );

        let mut data = serde_json::Map::new();
        data.insert("key".into(), serde_json::json!("value"));
        let req = ApplicationDataRequest { data };
        assert!(req.validate().is_ok());
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"key":"value"}"#);
    }
}
