//! GraphQL queries

use crate::error::ValidationError;
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A GraphQL query with optional operation name and variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub variables: serde_json::Map<String, serde_json::Value>,
}

impl Validate for GraphQlRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.query.is_empty() {
            return Err(ValidationError::required("query"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_request() {
        let nil: Option<&GraphQlRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));
        assert_eq!(
            GraphQlRequest::default().validate().unwrap_err().to_string(),
            "query is required"
        );

        let mut variables = serde_json::Map::new();
        variables.insert("first".into(), serde_json::json!(10));
        let req = GraphQlRequest {
            query: "query { viewer { id } }".into(),
            operation_name: None,
            variables,
        };
        assert!(req.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"query": "query { viewer { id } }", "variables": {"first": 10}})
        );
    }
}
