//! AI prompts, providers and provider models

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::{nested, one_of, Validate};
use serde::{Deserialize, Serialize};

const PROMPT_ACTIONS: &[&str] = &["pre_translate", "assist", "qa_check"];

/// What a prompt is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiPromptAction {
    PreTranslate,
    Assist,
    QaCheck,
}

impl AiPromptAction {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreTranslate => "pre_translate",
            Self::Assist => "assist",
            Self::QaCheck => "qa_check",
        }
    }
}

impl From<AiPromptAction> for String {
    fn from(action: AiPromptAction) -> Self {
        action.as_str().to_string()
    }
}

/// Known provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiProviderType {
    OpenAi,
    AzureOpenAi,
    GoogleGemini,
    MistralAi,
    Anthropic,
    CustomAi,
}

impl AiProviderType {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "open_ai",
            Self::AzureOpenAi => "azure_open_ai",
            Self::GoogleGemini => "google_gemini",
            Self::MistralAi => "mistral_ai",
            Self::Anthropic => "anthropic",
            Self::CustomAi => "custom_ai",
        }
    }
}

impl From<AiProviderType> for String {
    fn from(t: AiProviderType) -> Self {
        t.as_str().to_string()
    }
}

// ============================================================================
// Entities
// ============================================================================

/// An AI prompt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiPrompt {
    pub id: u64,
    pub name: String,
    pub action: String,
    pub ai_provider_id: Option<u64>,
    pub ai_model_id: Option<String>,
    pub is_system: bool,
    pub enabled: bool,
    pub enabled_project_ids: Vec<u64>,
    /// Shape depends on `config.mode`
    pub config: serde_json::Value,
    pub prompt_preview: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// An AI provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiProvider {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub credentials: serde_json::Value,
    pub config: serde_json::Value,
    pub is_enabled: bool,
    pub use_system_credentials: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A model offered by a provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiProviderModel {
    pub id: String,
    pub supports_json_mode: bool,
    pub supports_function_calling: bool,
    pub supports_vision: bool,
    pub context_window_limit: Option<u64>,
    pub output_limit: Option<u64>,
}

// ============================================================================
// Prompt config
// ============================================================================

/// Translations into other languages offered as context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherLanguageTranslations {
    pub is_enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub language_ids: Vec<String>,
}

/// Prompt assembled by the server from descriptions and toggles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicPromptConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_language_translations: Option<OtherLanguageTranslations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary_terms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tm_suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_context: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_project_description: Option<bool>,
}

/// Prompt written out in full by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedPromptConfig {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_language_translations: Option<OtherLanguageTranslations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<bool>,
}

/// Prompt `config`, keyed by `mode`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AiPromptConfig {
    Basic(BasicPromptConfig),
    Advanced(AdvancedPromptConfig),
}

impl Validate for AiPromptConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Basic(_) => Ok(()),
            Self::Advanced(config) => {
                if config.prompt.is_empty() {
                    return Err(ValidationError::required("prompt"));
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// List options
// ============================================================================

/// Options for listing AI prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiPromptsListOptions {
    pub project_id: Option<u64>,
    /// See [`AiPromptAction`]
    pub action: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for AiPromptsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_positive("projectId", self.project_id);
        v.add_str("action", self.action.as_deref());
        v.finish()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Add an AI prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiPromptAddRequest {
    pub name: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_provider_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_project_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<AiPromptConfig>,
}

impl Validate for AiPromptAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.action.is_empty() {
            return Err(ValidationError::required("action"));
        }
        one_of("action", &self.action, PROMPT_ACTIONS)?;
        nested("config", self.config.as_ref())
    }
}

/// Provider credentials; which keys apply depends on the provider type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiProviderCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Add an AI provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiProviderAddRequest {
    pub name: String,
    /// See [`AiProviderType`]
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<AiProviderCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_system_credentials: Option<bool>,
}

impl Validate for AiProviderAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.r#type.is_empty() {
            return Err(ValidationError::required("type"));
        }
        if self.credentials.is_none() && self.use_system_credentials != Some(true) {
            return Err(ValidationError::required("credentials"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> AiPromptAddRequest {
        AiPromptAddRequest {
            name: "Pre-translation prompt".into(),
            action: AiPromptAction::PreTranslate.into(),
            config: Some(AiPromptConfig::Basic(BasicPromptConfig::default())),
            ..Default::default()
        }
    }

    #[test]
    fn test_prompt_add_request() {
        let nil: Option<&AiPromptAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        assert!(prompt().validate().is_ok());
        assert_eq!(
            AiPromptAddRequest::default().validate().unwrap_err().to_string(),
            "name is required"
        );
        let req = AiPromptAddRequest {
            action: String::new(),
            ..prompt()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "action is required");
        let req = AiPromptAddRequest {
            action: "summarize".into(),
            ..prompt()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "invalid action: \"summarize\"");
        let req = AiPromptAddRequest {
            config: None,
            ..prompt()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "config is required");
        let req = AiPromptAddRequest {
            config: Some(AiPromptConfig::Advanced(AdvancedPromptConfig::default())),
            ..prompt()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "prompt is required");
    }

    #[test]
    fn test_prompt_config_is_tagged_by_mode() {
        let config = AiPromptConfig::Advanced(AdvancedPromptConfig {
            prompt: "Translate %sourceLanguage% to %targetLanguage%".into(),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({
                "mode": "advanced",
                "prompt": "Translate %sourceLanguage% to %targetLanguage%"
            })
        );

        let decoded: AiPromptConfig =
            serde_json::from_str(r#"{"mode": "basic", "glossaryTerms": true}"#).unwrap();
        assert_eq!(
            decoded,
            AiPromptConfig::Basic(BasicPromptConfig {
                glossary_terms: Some(true),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_provider_add_request() {
        let nil: Option<&AiProviderAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let mut req = AiProviderAddRequest {
            name: "OpenAI".into(),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "type is required");
        req.r#type = AiProviderType::OpenAi.into();
        assert_eq!(req.validate().unwrap_err().to_string(), "credentials is required");
        req.use_system_credentials = Some(true);
        assert!(req.validate().is_ok());
        req.use_system_credentials = None;
        req.credentials = Some(AiProviderCredentials {
            api_key: Some("sk-test".into()),
            ..Default::default()
        });
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_prompts_list_options() {
        let opts = AiPromptsListOptions {
            project_id: Some(1),
            action: Some("assist".into()),
            ..Default::default()
        };
        assert_eq!(opts.values().0.encode(), "action=assist&projectId=1");
        let nil: Option<&AiPromptsListOptions> = None;
        assert_eq!(nil.values(), (Values::new(), false));
    }
}
