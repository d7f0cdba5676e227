//! Storage: temporary uploads referenced by other requests

use serde::{Deserialize, Serialize};

/// An uploaded file waiting to be used by `storageId`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Storage {
    pub id: u64,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_deserialize() {
        let s: Storage = serde_json::from_str(r#"{"id": 61, "fileName": "umbrella_app.xliff"}"#).unwrap();
        assert_eq!(s.id, 61);
        assert_eq!(s.file_name, "umbrella_app.xliff");
    }
}
