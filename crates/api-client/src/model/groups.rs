//! Project groups (Enterprise)

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A group of projects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<u64>,
    pub organization_id: u64,
    pub user_id: u64,
    pub subgroups_count: u64,
    pub projects_count: u64,
    pub web_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Options for listing groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupsListOptions {
    pub order_by: Option<String>,
    /// `Some(0)` lists root groups
    pub parent_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for GroupsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_some("parentId", self.parent_id);
        v.finish()
    }
}

/// Add a group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAddRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Validate for GroupAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        Ok(())
    }
}
