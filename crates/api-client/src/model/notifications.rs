//! Notifications to users, project members and the organization

use crate::error::ValidationError;
use crate::validate::{one_of_opt, Validate};
use serde::{Deserialize, Serialize};

const ROLES: &[&str] = &["owner", "manager"];

/// Send a notification.
///
/// Without `user_ids` or `role` the message goes to every recipient in
/// scope. `user_ids` and `role` select recipients in mutually exclusive ways.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<u64>,
    /// `owner` or `manager`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Validate for NotificationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.message.is_empty() {
            return Err(ValidationError::required("message"));
        }
        let role = self.role.as_deref().filter(|r| !r.is_empty());
        if !self.user_ids.is_empty() && role.is_some() {
            return Err(ValidationError::conflict("userIds", "role"));
        }
        one_of_opt("role", role, ROLES)
    }
}
