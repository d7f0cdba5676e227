//! Screenshots and their string tags

use crate::error::ValidationError;
use crate::model::both_set;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};

/// A project screenshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Screenshot {
    pub id: u64,
    pub user_id: u64,
    pub url: String,
    pub web_url: Option<String>,
    pub name: String,
    pub size: ScreenshotSize,
    pub tags_count: u64,
    pub tags: Vec<Tag>,
    pub labels: Vec<u64>,
    pub label_ids: Vec<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Image dimensions in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotSize {
    pub width: u32,
    pub height: u32,
}

/// A string tagged on a screenshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    pub id: u64,
    pub screenshot_id: u64,
    pub string_id: u64,
    pub position: Option<TagPosition>,
    pub created_at: Option<String>,
}

/// Tag rectangle on the screenshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPosition {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Options for listing screenshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenshotListOptions {
    pub order_by: Option<String>,
    pub string_ids: Vec<String>,
    pub label_ids: Vec<String>,
    pub exclude_label_ids: Vec<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for ScreenshotListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_joined("stringIds", &self.string_ids);
        v.add_joined("labelIds", &self.label_ids);
        v.add_joined("excludeLabelIds", &self.exclude_label_ids);
        v.finish()
    }
}

fn check_scope(
    file_id: Option<u64>,
    branch_id: Option<u64>,
    directory_id: Option<u64>,
) -> Result<(), ValidationError> {
    if both_set(file_id, branch_id) {
        return Err(ValidationError::conflict("fileId", "branchId"));
    }
    if both_set(branch_id, directory_id) {
        return Err(ValidationError::conflict("branchId", "directoryId"));
    }
    if both_set(file_id, directory_id) {
        return Err(ValidationError::conflict("fileId", "directoryId"));
    }
    Ok(())
}

/// Add a screenshot from a storage upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotAddRequest {
    pub storage_id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<u64>,
}

impl Validate for ScreenshotAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_id == 0 {
            return Err(ValidationError::required("storageId"));
        }
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        check_scope(self.file_id, self.branch_id, self.directory_id)
    }
}

/// Replace a screenshot image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotUpdateRequest {
    pub storage_id: u64,
    pub name: String,
}

impl Validate for ScreenshotUpdateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_id == 0 {
            return Err(ValidationError::required("storageId"));
        }
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        Ok(())
    }
}

/// Tag a string on a screenshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAddRequest {
    pub string_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<TagPosition>,
}

impl Validate for TagAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.string_id == 0 {
            return Err(ValidationError::required("stringId"));
        }
        Ok(())
    }
}

/// Let the server tag strings automatically
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoTagRequest {
    pub auto_tag: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<u64>,
}

impl Validate for AutoTagRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_scope(self.file_id, self.branch_id, self.directory_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ids_joined() {
        let opts = ScreenshotListOptions {
            label_ids: vec!["1".into(), "2".into(), "3".into()],
            ..Default::default()
        };
        let (v, ok) = opts.values();
        assert!(ok);
        assert_eq!(v.get("labelIds"), Some("1,2,3"));
        assert_eq!(v.len(), 1);

        let nil: Option<&ScreenshotListOptions> = None;
        assert_eq!(nil.values(), (Values::new(), false));
    }

    #[test]
    fn test_add_request_scope_pairs() {
        let nil: Option<&ScreenshotAddRequest> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        let base = ScreenshotAddRequest {
            storage_id: 71,
            name: "translate_with_siri.jpg".into(),
            ..Default::default()
        };
        assert!(base.validate().is_ok());

        let cases = [
            (Some(1), Some(2), None, "fileId and branchId cannot be used in the same request"),
            (None, Some(2), Some(3), "branchId and directoryId cannot be used in the same request"),
            (Some(1), None, Some(3), "fileId and directoryId cannot be used in the same request"),
        ];
        for (file_id, branch_id, directory_id, expected) in cases {
            let req = ScreenshotAddRequest {
                file_id,
                branch_id,
                directory_id,
                ..base.clone()
            };
            assert_eq!(req.validate().unwrap_err().to_string(), expected);
        }
    }

    #[test]
    fn test_add_request_required() {
        assert_eq!(
            ScreenshotAddRequest::default().validate().unwrap_err().to_string(),
            "storageId is required"
        );
        let req = ScreenshotAddRequest {
            storage_id: 1,
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "name is required");
    }

    #[test]
    fn test_update_and_tag() {
        let req = ScreenshotUpdateRequest {
            storage_id: 1,
            name: String::new(),
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "name is required");
        assert_eq!(
            TagAddRequest::default().validate().unwrap_err().to_string(),
            "stringId is required"
        );
        let tag = TagAddRequest {
            string_id: 2814,
            position: Some(TagPosition {
                x: 474,
                y: 147,
                width: 490,
                height: 99,
            }),
        };
        assert!(tag.validate().is_ok());
        assert!(AutoTagRequest {
            auto_tag: true,
            file_id: Some(1),
            branch_id: Some(2),
            directory_id: None,
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_screenshot_deserialize() {
        let json = r#"{
            "id": 2,
            "userId": 6,
            "url": "https://production-enterprise-screenshots.downloads.crowdin.com/992000002/6/2/middle.jpg",
            "name": "translate_with_siri.jpg",
            "size": {"width": 267, "height": 176},
            "tagsCount": 1,
            "tags": [{"id": 98, "screenshotId": 2, "stringId": 2822, "position": {"x": 474, "y": 147, "width": 490, "height": 99}}]
        }"#;
        let shot: Screenshot = serde_json::from_str(json).unwrap();
        assert_eq!(shot.size.width, 267);
        assert_eq!(shot.tags[0].position.unwrap().height, 99);
    }
}
