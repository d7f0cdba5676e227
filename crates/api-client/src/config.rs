//! Configuration for the Crowdin API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Default crowdin.com API base URL
const DEFAULT_BASE_URL: &str = "https://api.crowdin.com/api/v2";

/// Crowdin product edition the client talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// crowdin.com
    #[default]
    Crowdin,
    /// Crowdin Enterprise, addressed through an organization subdomain
    Enterprise,
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, without trailing slash
    pub base_url: String,
    /// Enterprise organization domain, if any
    pub organization: Option<String>,
    /// Edition derived from the organization
    pub edition: Edition,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: None,
            edition: Edition::Crowdin,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `CROWDIN_ORGANIZATION`: Enterprise organization domain (optional)
    /// - `CROWDIN_BASE_URL`: Explicit base URL, overrides the derived one
    pub fn from_env() -> ApiResult<Self> {
        let mut config = match env::var("CROWDIN_ORGANIZATION") {
            Ok(org) if !org.trim().is_empty() => Self::enterprise(org.trim()),
            _ => Self::default(),
        };

        if let Ok(url) = env::var("CROWDIN_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Configuration for a Crowdin Enterprise organization
    #[must_use]
    pub fn enterprise(organization: impl Into<String>) -> Self {
        let organization = organization.into();
        Self {
            base_url: enterprise_base_url(&organization),
            organization: Some(organization),
            edition: Edition::Enterprise,
        }
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder-style method to set the organization
    ///
    /// Switches the edition to Enterprise and derives the base URL.
    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        let organization = organization.into();
        self.base_url = enterprise_base_url(&organization);
        self.organization = Some(organization);
        self.edition = Edition::Enterprise;
        self
    }

    /// Whether the configuration targets Crowdin Enterprise
    #[must_use]
    pub fn is_enterprise(&self) -> bool {
        self.edition == Edition::Enterprise
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.edition == Edition::Enterprise
            && self.organization.as_deref().is_none_or(str::is_empty)
        {
            return Err(ApiError::config("organization is required for Enterprise"));
        }

        Ok(())
    }
}

fn enterprise_base_url(organization: &str) -> String {
    format!("https://{organization}.api.crowdin.com/api/v2")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.crowdin.com/api/v2");
        assert_eq!(config.edition, Edition::Crowdin);
        assert!(!config.is_enterprise());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enterprise_config() {
        let config = ClientConfig::enterprise("acme");
        assert_eq!(config.base_url, "https://acme.api.crowdin.com/api/v2");
        assert_eq!(config.organization.as_deref(), Some("acme"));
        assert!(config.is_enterprise());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080/api/v2/");
        assert_eq!(config.base_url, "http://localhost:8080/api/v2");

        let config = ClientConfig::default().with_organization("acme");
        assert_eq!(config.edition, Edition::Enterprise);
    }

    #[test]
    fn test_validation() {
        let invalid = ClientConfig::default().with_base_url("");
        assert!(matches!(invalid.validate(), Err(ApiError::Config(_))));

        let invalid = ClientConfig::default().with_base_url("ftp://example.com");
        assert!(matches!(invalid.validate(), Err(ApiError::Config(_))));

        let invalid = ClientConfig::default().with_base_url("not a url");
        assert!(matches!(invalid.validate(), Err(ApiError::InvalidUrl(_))));

        let invalid = ClientConfig {
            edition: Edition::Enterprise,
            ..ClientConfig::default()
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_edition_serde() {
        let json = serde_json::to_string(&Edition::Enterprise).unwrap();
        assert_eq!(json, "\"enterprise\"");
    }
}
