//! Security logs of users and the organization

use crate::query::{ListOptions, ListOptionsProvider, Values};
use serde::{Deserialize, Serialize};

/// A security-relevant event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityLog {
    pub id: u64,
    /// e.g. `login`, `password.change`, `2fa.enabled`
    pub event: String,
    pub info: String,
    pub user_id: u64,
    pub location: String,
    pub ip_address: String,
    pub device_name: String,
    pub created_at: Option<String>,
}

/// Options for listing security logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityLogsListOptions {
    pub event: Option<String>,
    /// ISO 8601 timestamp
    pub created_after: Option<String>,
    /// ISO 8601 timestamp
    pub created_before: Option<String>,
    pub ip_address: Option<String>,
    /// Organization logs only
    pub user_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for SecurityLogsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("event", self.event.as_deref());
        v.add_str("createdAfter", self.created_after.as_deref());
        v.add_str("createdBefore", self.created_before.as_deref());
        v.add_str("ipAddress", self.ip_address.as_deref());
        v.add_positive("userId", self.user_id);
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options() {
        let nil: Option<&SecurityLogsListOptions> = None;
        assert!(!nil.values().1);

        let opts = SecurityLogsListOptions {
            event: Some("login".into()),
            created_after: Some("2023-09-20T11:34:40+00:00".into()),
            ip_address: Some("127.0.0.1".into()),
            user_id: Some(0),
            ..Default::default()
        };
        let (v, has) = opts.values();
        assert!(has);
        assert_eq!(v.get("createdAfter"), Some("2023-09-20T11:34:40+00:00"));
        assert!(!v.contains_key("userId"));
        assert_eq!(
            v.encode(),
            "createdAfter=2023-09-20T11%3A34%3A40%2B00%3A00&event=login&ipAddress=127.0.0.1"
        );
    }
}
