//! Users and project members

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A user account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub status: String,
    pub avatar_url: Option<String>,
    pub created_at: Option<String>,
    pub last_seen: Option<String>,
    pub two_factor: Option<String>,
    pub timezone: Option<String>,
    pub is_admin: bool,
}

/// A member of a project with their roles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectMember {
    pub id: u64,
    pub username: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub permissions: serde_json::Value,
    pub roles: Vec<serde_json::Value>,
    pub avatar_url: Option<String>,
    pub joined_at: Option<String>,
    pub timezone: Option<String>,
}

/// Members added to a project and those skipped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectMemberAddResult {
    pub skipped: Vec<ProjectMember>,
    pub added: Vec<ProjectMember>,
    pub paging_added: Option<serde_json::Value>,
}

/// Options for listing project members
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMembersListOptions {
    pub order_by: Option<String>,
    pub search: Option<String>,
    /// e.g. `owner`, `manager`, `proofreader`, `translator`, `blocked`
    pub role: Option<String>,
    pub language_id: Option<String>,
    pub workflow_step_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for ProjectMembersListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_str("search", self.search.as_deref());
        v.add_str("role", self.role.as_deref());
        v.add_str("languageId", self.language_id.as_deref());
        v.add_positive("workflowStepId", self.workflow_step_id);
        v.finish()
    }
}

/// Options for listing organization users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersListOptions {
    pub order_by: Option<String>,
    /// `active`, `pending` or `blocked`
    pub status: Option<String>,
    pub search: Option<String>,
    /// `enabled` or `disabled`
    pub two_factor: Option<String>,
    pub organization_roles: Vec<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for UsersListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_str("status", self.status.as_deref());
        v.add_str("search", self.search.as_deref());
        v.add_str("twoFactor", self.two_factor.as_deref());
        v.add_joined("organizationRoles", &self.organization_roles);
        v.finish()
    }
}

/// Add members to a project by id, username or email
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberAddRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usernames: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<serde_json::Value>,
}

impl Validate for ProjectMemberAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.user_ids.is_empty() && self.usernames.is_empty() && self.emails.is_empty() {
            return Err(ValidationError::field("one of userIds, usernames or emails is required"));
        }
        Ok(())
    }
}

/// Invite a user to the organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteUserRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Validate for InviteUserRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() {
            return Err(ValidationError::required("email"));
        }
        Ok(())
    }
}
