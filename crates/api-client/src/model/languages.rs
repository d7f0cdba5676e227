//! Supported and custom languages

use crate::error::ValidationError;
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// Text direction of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl From<TextDirection> for String {
    fn from(value: TextDirection) -> Self {
        value.as_str().to_string()
    }
}

/// A language known to the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub editor_code: String,
    pub two_letters_code: String,
    pub three_letters_code: String,
    pub locale: String,
    pub android_code: String,
    pub os_x_code: String,
    pub os_x_locale: String,
    pub plural_category_names: Vec<String>,
    pub plural_rules: String,
    pub plural_examples: Vec<String>,
    pub text_direction: String,
    pub dialect_of: Option<String>,
}

/// Add a custom language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageAddRequest {
    pub name: String,
    pub code: String,
    pub locale_code: String,
    /// `ltr` or `rtl`
    pub text_direction: String,
    pub plural_category_names: Vec<String>,
    pub three_letters_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_letters_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect_of: Option<String>,
}

impl Validate for LanguageAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.code.is_empty() {
            return Err(ValidationError::required("code"));
        }
        if self.locale_code.is_empty() {
            return Err(ValidationError::required("localeCode"));
        }
        if self.text_direction.is_empty() {
            return Err(ValidationError::required("textDirection"));
        }
        if self.text_direction != "ltr" && self.text_direction != "rtl" {
            return Err(ValidationError::field(r#"textDirection must be "ltr" or "rtl""#));
        }
        if self.plural_category_names.is_empty() {
            return Err(ValidationError::required("pluralCategoryNames"));
        }
        if self.three_letters_code.is_empty() {
            return Err(ValidationError::required("threeLettersCode"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_add_request() {
        let nil: Option<&LanguageAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let mut req = LanguageAddRequest::default();
        assert_eq!(req.validate().unwrap_err().to_string(), "name is required");
        req.name = "Custom Ukrainian".into();
        assert_eq!(req.validate().unwrap_err().to_string(), "code is required");
        req.code = "ukc".into();
        assert_eq!(req.validate().unwrap_err().to_string(), "localeCode is required");
        req.locale_code = "uk-UA".into();
        assert_eq!(req.validate().unwrap_err().to_string(), "textDirection is required");
        req.text_direction = "up".into();
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            r#"textDirection must be "ltr" or "rtl""#
        );
        req.text_direction = TextDirection::Ltr.into();
        assert_eq!(req.validate().unwrap_err().to_string(), "pluralCategoryNames is required");
        req.plural_category_names = vec!["one".into(), "few".into(), "many".into()];
        assert_eq!(req.validate().unwrap_err().to_string(), "threeLettersCode is required");
        req.three_letters_code = "ukc".into();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_language_deserialize() {
        let lang: Language = serde_json::from_str(
            r#"{"id": "uk", "name": "Ukrainian", "osXCode": "uk.lproj", "textDirection": "ltr"}"#,
        )
        .unwrap();
        assert_eq!(lang.os_x_code, "uk.lproj");
        assert_eq!(lang.text_direction, TextDirection::Ltr.as_str());
    }
}
