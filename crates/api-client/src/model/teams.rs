//! Teams (Enterprise)

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A team of organization members
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub total_members: u64,
    pub web_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A team member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub id: u64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub added_at: Option<String>,
}

/// Team membership in a project, with the members it added or skipped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectTeam {
    pub skipped: serde_json::Value,
    pub added: serde_json::Value,
}

/// Options for listing teams
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamsListOptions {
    pub order_by: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for TeamsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.finish()
    }
}

/// Add a team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAddRequest {
    pub name: String,
}

impl Validate for TeamAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        Ok(())
    }
}

/// Add a team to a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamToProjectRequest {
    pub team_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<serde_json::Value>,
}

impl Validate for TeamToProjectRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.team_id == 0 {
            return Err(ValidationError::required("teamId"));
        }
        Ok(())
    }
}

/// Add users to a team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembersAddRequest {
    pub user_ids: Vec<u64>,
}

impl Validate for TeamMembersAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.user_ids.is_empty() {
            return Err(ValidationError::required("userIds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options() {
        let opts = TeamsListOptions {
            order_by: Some("createdAt desc,name".into()),
            list_options: ListOptions::new(10, 0),
        };
        assert_eq!(opts.values().0.encode(), "limit=10&orderBy=createdAt+desc%2Cname");
    }

    #[test]
    fn test_requests() {
        let nil: Option<&TeamAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));
        assert_eq!(TeamAddRequest::default().validate().unwrap_err().to_string(), "name is required");
        assert_eq!(
            TeamToProjectRequest::default().validate().unwrap_err().to_string(),
            "teamId is required"
        );
        assert_eq!(
            TeamMembersAddRequest::default().validate().unwrap_err().to_string(),
            "userIds is required"
        );

        let req = TeamToProjectRequest {
            team_id: 2,
            manager_access: Some(true),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"teamId":2,"managerAccess":true}"#);
    }
}
