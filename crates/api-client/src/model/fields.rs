//! Custom fields (Enterprise)

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// Field types whose values come from a fixed option list
const SELECT_LIKE_TYPES: &[&str] = &["select", "multiselect", "radiobuttons"];

/// A custom field definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// `checkbox`, `radiobuttons`, `date`, `datetime`, `number`, `labels`,
    /// `select`, `multiselect`, `text`, `textarea` or `url`
    #[serde(rename = "type")]
    pub r#type: String,
    pub description: Option<String>,
    /// `project`, `user`, `task`, `file`, `translation` or `string`
    pub entities: Vec<String>,
    pub config: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Options for listing custom fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsListOptions {
    pub search: Option<String>,
    pub entity: Option<String>,
    pub r#type: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for FieldsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("search", self.search.as_deref());
        v.add_str("entity", self.entity.as_deref());
        v.add_str("type", self.r#type.as_deref());
        v.finish()
    }
}

/// Where a field is shown in the UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLocation {
    /// e.g. `projectCreateModal`, `projectHeader`, `projectDetails`
    pub place: String,
}

/// One selectable option
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

/// Config of option-based fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListFieldConfig {
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<FieldLocation>,
}

/// Config of number fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberFieldConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<FieldLocation>,
}

/// Config of every other field type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OtherFieldConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<FieldLocation>,
}

/// Field `config`, shaped by the field type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldConfig {
    List(ListFieldConfig),
    Other(OtherFieldConfig),
    Number(NumberFieldConfig),
}

impl Validate for FieldConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::List(config) if config.options.is_empty() => {
                Err(ValidationError::required("options"))
            }
            Self::Number(NumberFieldConfig {
                min: Some(min),
                max: Some(max),
                ..
            }) if min > max => Err(ValidationError::field("min cannot be greater than max")),
            _ => Ok(()),
        }
    }
}

/// Add a custom field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAddRequest {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub entities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<FieldConfig>,
}

impl Validate for FieldAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.slug.is_empty() {
            return Err(ValidationError::required("slug"));
        }
        if self.r#type.is_empty() {
            return Err(ValidationError::required("type"));
        }
        if self.entities.is_empty() {
            return Err(ValidationError::required("entities"));
        }
        let select_like = SELECT_LIKE_TYPES.contains(&self.r#type.as_str());
        match &self.config {
            None if select_like => Err(ValidationError::required("config")),
            None => Ok(()),
            Some(config) => {
                if select_like && !matches!(config, FieldConfig::List(_)) {
                    return Err(ValidationError::required("options"));
                }
                config.validate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(field_type: &str) -> FieldAddRequest {
        FieldAddRequest {
            name: "Client".into(),
            slug: "client".into(),
            r#type: field_type.into(),
            entities: vec!["project".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_required_order() {
        let nil: Option<&FieldAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let cases = [
            (FieldAddRequest::default(), "name is required"),
            (
                FieldAddRequest {
                    slug: String::new(),
                    ..field("text")
                },
                "slug is required",
            ),
            (
                FieldAddRequest {
                    r#type: String::new(),
                    ..field("text")
                },
                "type is required",
            ),
            (
                FieldAddRequest {
                    entities: vec![],
                    ..field("text")
                },
                "entities is required",
            ),
        ];
        for (req, expected) in cases {
            assert_eq!(req.validate().unwrap_err().to_string(), expected);
        }
        assert!(field("text").validate().is_ok());
    }

    #[test]
    fn test_select_like_requires_options() {
        assert_eq!(field("select").validate().unwrap_err().to_string(), "config is required");

        let req = FieldAddRequest {
            config: Some(FieldConfig::Other(OtherFieldConfig::default())),
            ..field("multiselect")
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "options is required");

        let req = FieldAddRequest {
            config: Some(FieldConfig::List(ListFieldConfig::default())),
            ..field("radiobuttons")
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "options is required");

        let req = FieldAddRequest {
            config: Some(FieldConfig::List(ListFieldConfig {
                options: vec![FieldOption {
                    label: "Acme".into(),
                    value: "acme".into(),
                }],
                locations: vec![],
            })),
            ..field("select")
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_number_config() {
        let req = FieldAddRequest {
            config: Some(FieldConfig::Number(NumberFieldConfig {
                min: Some(10.0),
                max: Some(1.0),
                ..Default::default()
            })),
            ..field("number")
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "min cannot be greater than max"
        );
    }

    #[test]
    fn test_config_shapes_decode() {
        let config: FieldConfig =
            serde_json::from_str(r#"{"options": [{"label": "A", "value": "a"}]}"#).unwrap();
        assert!(matches!(config, FieldConfig::List(_)));
        let config: FieldConfig = serde_json::from_str(r#"{"min": 1, "units": "px"}"#).unwrap();
        assert!(matches!(config, FieldConfig::Number(_)));
        let config: FieldConfig =
            serde_json::from_str(r#"{"locations": [{"place": "projectHeader"}]}"#).unwrap();
        assert!(matches!(config, FieldConfig::Other(_)));
    }

    #[test]
    fn test_list_options() {
        let opts = FieldsListOptions {
            search: Some("client".into()),
            entity: Some("project".into()),
            r#type: Some("select".into()),
            ..Default::default()
        };
        assert_eq!(opts.values().0.encode(), "entity=project&search=client&type=select");
    }
}
