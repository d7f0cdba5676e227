//! Tasks, task comments and task settings templates
//!
//! Task creation accepts three payload shapes (regular, vendor and pending),
//! grouped under [`TaskAddRequest`].

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::validate::Validate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Task type, transmitted as an integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskType {
    #[default]
    Translate,
    Proofread,
    TranslateByVendor,
    ProofreadByVendor,
}

impl TaskType {
    /// Wire value
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Translate => 0,
            Self::Proofread => 1,
            Self::TranslateByVendor => 2,
            Self::ProofreadByVendor => 3,
        }
    }
}

impl TryFrom<u8> for TaskType {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Translate),
            1 => Ok(Self::Proofread),
            2 => Ok(Self::TranslateByVendor),
            3 => Ok(Self::ProofreadByVendor),
            other => Err(ValidationError::invalid("task type", &other.to_string())),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl Serialize for TaskType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for TaskType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// Task status wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Closed,
}

impl TaskStatus {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Closed => "closed",
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A project task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: u64,
    pub project_id: u64,
    pub creator_id: u64,
    /// Raw type; see [`Task::task_type`]
    #[serde(rename = "type")]
    pub r#type: u8,
    pub vendor: Option<String>,
    pub status: String,
    pub title: String,
    pub assignees: Vec<TaskAssignee>,
    pub assigned_teams: Vec<TaskAssignedTeam>,
    pub progress: TaskProgress,
    pub translate_progress: Option<TaskProgress>,
    pub source_language_id: String,
    pub target_language_id: String,
    pub description: Option<String>,
    pub translation_url: Option<String>,
    pub web_url: Option<String>,
    pub words_count: u64,
    pub comments_count: u64,
    pub file_ids: Vec<u64>,
    pub branch_ids: Vec<u64>,
    pub labels_ids: Vec<u64>,
    pub exclude_labels_ids: Vec<u64>,
    pub preceding_task_id: Option<u64>,
    pub workflow_step_id: Option<u64>,
    pub buy_url: Option<String>,
    pub is_archived: bool,
    pub deadline: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Task {
    /// Typed task type, `None` for values this crate does not know
    #[must_use]
    pub fn task_type(&self) -> Option<TaskType> {
        TaskType::try_from(self.r#type).ok()
    }
}

/// A user assigned to a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskAssignee {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_left: Option<u64>,
}

/// A team assigned to a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskAssignedTeam {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_count: Option<u64>,
}

/// Word progress of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskProgress {
    pub total: u64,
    pub done: u64,
    pub percent: u8,
}

/// A comment left on a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskComment {
    pub id: u64,
    pub user_id: u64,
    pub task_id: u64,
    pub text: String,
    pub time_spent: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A reusable task settings template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskSettingsTemplate {
    pub id: u64,
    pub name: String,
    pub config: TaskSettingsTemplateConfig,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Languages and assignees of a settings template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskSettingsTemplateConfig {
    pub languages: Vec<TaskSettingsTemplateLanguage>,
}

/// Per-language assignment of a settings template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskSettingsTemplateLanguage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_ids: Vec<u64>,
}

// ============================================================================
// List options
// ============================================================================

/// Options for listing project tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasksListOptions {
    /// e.g. `createdAt desc,title`
    pub order_by: Option<String>,
    /// Statuses to include, see [`TaskStatus`]
    pub status: Vec<String>,
    pub assignee_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for TasksListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_joined("status", &self.status);
        v.add_positive("assigneeId", self.assignee_id);
        v.finish()
    }
}

/// Options for listing the authenticated user's tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTasksListOptions {
    pub order_by: Option<String>,
    pub status: Vec<String>,
    /// 0 or 1
    pub is_archived: Option<u8>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for UserTasksListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_joined("status", &self.status);
        v.add_flag("isArchived", self.is_archived);
        v.finish()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Create a regular (translate or proofread) task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateForm {
    pub title: String,
    pub language_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TaskType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub string_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branch_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_step_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_assigned_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_pre_translated_strings_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_labels_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<TaskAssignee>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_teams: Vec<TaskAssignedTeam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Validate for TaskCreateForm {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::required("title"));
        }
        if self.language_id.is_empty() {
            return Err(ValidationError::required("languageId"));
        }
        if self.r#type.is_none() {
            return Err(ValidationError::required("type"));
        }
        if self.string_ids.is_empty() && self.file_ids.is_empty() && self.branch_ids.is_empty() {
            return Err(ValidationError::field(
                "one of stringIds, fileIds or branchIds is required",
            ));
        }
        Ok(())
    }
}

/// Create a task fulfilled by a translation vendor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorTaskCreateForm {
    pub title: String,
    pub language_id: String,
    /// Vendor slug (`gengo`, `oht`, `translated`, `manual`, ...)
    pub vendor: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_step_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_assigned_strings: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl Validate for VendorTaskCreateForm {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::required("title"));
        }
        if self.language_id.is_empty() {
            return Err(ValidationError::required("languageId"));
        }
        if self.vendor.is_empty() {
            return Err(ValidationError::required("vendor"));
        }
        if self.file_ids.is_empty() {
            return Err(ValidationError::required("fileIds"));
        }
        Ok(())
    }
}

/// Create a task that starts when its preceding task finishes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTaskCreateForm {
    pub preceding_task_id: u64,
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<TaskAssignee>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_teams: Vec<TaskAssignedTeam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl Validate for PendingTaskCreateForm {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.preceding_task_id == 0 {
            return Err(ValidationError::required("precedingTaskId"));
        }
        if self.title.is_empty() {
            return Err(ValidationError::required("title"));
        }
        Ok(())
    }
}

/// Body of `POST /projects/{projectId}/tasks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskAddRequest {
    Regular(TaskCreateForm),
    Vendor(VendorTaskCreateForm),
    Pending(PendingTaskCreateForm),
}

impl Validate for TaskAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Regular(form) => form.validate(),
            Self::Vendor(form) => form.validate(),
            Self::Pending(form) => form.validate(),
        }
    }
}

impl From<TaskCreateForm> for TaskAddRequest {
    fn from(form: TaskCreateForm) -> Self {
        Self::Regular(form)
    }
}

impl From<VendorTaskCreateForm> for TaskAddRequest {
    fn from(form: VendorTaskCreateForm) -> Self {
        Self::Vendor(form)
    }
}

impl From<PendingTaskCreateForm> for TaskAddRequest {
    fn from(form: PendingTaskCreateForm) -> Self {
        Self::Pending(form)
    }
}

/// Create a task settings template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSettingsTemplateAddRequest {
    pub name: String,
    pub config: TaskSettingsTemplateConfig,
}

impl Validate for TaskSettingsTemplateAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.config.languages.is_empty() {
            return Err(ValidationError::required("config.languages"));
        }
        Ok(())
    }
}

/// Comment on a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCommentAddRequest {
    pub text: String,
    /// Seconds spent on the task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u64>,
}

impl Validate for TaskCommentAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.text.is_empty() {
            return Err(ValidationError::required("text"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TaskCreateForm {
        TaskCreateForm {
            title: "Test task".into(),
            language_id: "uk".into(),
            r#type: Some(TaskType::Proofread),
            file_ids: vec![1, 2],
            ..Default::default()
        }
    }

    #[test]
    fn test_task_type_wire_value() {
        assert_eq!(serde_json::to_string(&TaskType::Proofread).unwrap(), "1");
        let t: TaskType = serde_json::from_str("3").unwrap();
        assert_eq!(t, TaskType::ProofreadByVendor);
        assert!(serde_json::from_str::<TaskType>("9").is_err());
    }

    #[test]
    fn test_task_create_form_validate() {
        let nil: Option<&TaskCreateForm> = None;
        assert_eq!(nil.validate(), Err(ValidationError::NilRequest));

        assert!(form().validate().is_ok());

        let req = TaskCreateForm {
            file_ids: vec![],
            ..form()
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "one of stringIds, fileIds or branchIds is required"
        );

        let req = TaskCreateForm {
            file_ids: vec![],
            branch_ids: vec![7],
            ..form()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_task_create_form_order() {
        assert_eq!(
            TaskCreateForm::default().validate().unwrap_err().to_string(),
            "title is required"
        );
        let req = TaskCreateForm {
            language_id: String::new(),
            ..form()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "languageId is required");
        let req = TaskCreateForm {
            r#type: None,
            ..form()
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "type is required");
    }

    #[test]
    fn test_task_create_form_serialize() {
        assert_eq!(
            serde_json::to_value(form()).unwrap(),
            serde_json::json!({
                "title": "Test task",
                "languageId": "uk",
                "type": 1,
                "fileIds": [1, 2]
            })
        );
    }

    #[test]
    fn test_vendor_and_pending_forms() {
        let vendor = VendorTaskCreateForm {
            title: "Vendor".into(),
            language_id: "de".into(),
            vendor: "gengo".into(),
            ..Default::default()
        };
        assert_eq!(vendor.validate().unwrap_err().to_string(), "fileIds is required");

        let pending = PendingTaskCreateForm {
            title: "Next".into(),
            ..Default::default()
        };
        assert_eq!(
            pending.validate().unwrap_err().to_string(),
            "precedingTaskId is required"
        );
    }

    #[test]
    fn test_task_add_request_delegates() {
        let req: TaskAddRequest = form().into();
        assert!(req.validate().is_ok());

        let req = TaskAddRequest::Pending(PendingTaskCreateForm {
            preceding_task_id: 4,
            ..Default::default()
        });
        assert_eq!(req.validate().unwrap_err().to_string(), "title is required");

        let json = serde_json::to_value(TaskAddRequest::Pending(PendingTaskCreateForm {
            preceding_task_id: 4,
            title: "Proofread".into(),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(json, serde_json::json!({"precedingTaskId": 4, "title": "Proofread"}));
    }

    #[test]
    fn test_settings_template_and_comment() {
        let req = TaskSettingsTemplateAddRequest {
            name: "Default".into(),
            ..Default::default()
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "config.languages is required"
        );
        assert_eq!(
            TaskCommentAddRequest::default().validate().unwrap_err().to_string(),
            "text is required"
        );
    }

    #[test]
    fn test_list_options() {
        let opts = TasksListOptions {
            status: vec![TaskStatus::Todo.into(), TaskStatus::InProgress.into()],
            assignee_id: Some(12),
            ..Default::default()
        };
        assert_eq!(opts.values().0.encode(), "assigneeId=12&status=todo%2Cin_progress");

        let opts = UserTasksListOptions {
            is_archived: Some(2),
            ..Default::default()
        };
        assert_eq!(opts.values(), (Values::new(), false));

        let opts = UserTasksListOptions {
            is_archived: Some(0),
            ..Default::default()
        };
        assert_eq!(opts.values().0.get("isArchived"), Some("0"));
    }

    #[test]
    fn test_task_deserialize() {
        let json = r#"{
            "id": 2,
            "projectId": 2,
            "creatorId": 6,
            "type": 1,
            "status": "todo",
            "title": "French",
            "assignees": [{"id": 12, "username": "john_smith", "wordsCount": 5}],
            "progress": {"total": 24, "done": 15, "percent": 62},
            "sourceLanguageId": "en",
            "targetLanguageId": "fr",
            "fileIds": [1]
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.task_type(), Some(TaskType::Proofread));
        assert_eq!(task.assignees[0].words_count, Some(5));
        assert_eq!(task.progress.percent, 62);
    }
}
