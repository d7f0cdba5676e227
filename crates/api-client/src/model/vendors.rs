//! Translation vendors of an Enterprise organization
//!
//! Read-only resource; listing uses the shared [`ListOptions`](crate::ListOptions).

use serde::{Deserialize, Serialize};

/// A vendor the organization works with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    /// `pending`, `confirmed` or `rejected`
    pub status: String,
    pub web_url: Option<String>,
}
