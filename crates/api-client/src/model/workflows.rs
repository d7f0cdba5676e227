//! Workflow templates and workflow steps

use crate::query::{ListOptions, ListOptionsProvider, Values};
use serde::{Deserialize, Serialize};

/// A workflow template (Enterprise)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowTemplate {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub group_id: u64,
    pub is_default: bool,
    pub web_url: Option<String>,
    pub steps: Vec<WorkflowTemplateStep>,
}

/// A step of a workflow template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowTemplateStep {
    pub id: u64,
    pub languages: Vec<String>,
    pub assignees: Vec<u64>,
    pub vendor_id: Option<u64>,
    pub config: serde_json::Value,
    pub mt_id: Option<u64>,
}

/// A step of a project's workflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowStep {
    pub id: u64,
    pub title: String,
    /// e.g. `Translate`, `Proofread`, `TranslateByVendor`
    #[serde(rename = "type")]
    pub r#type: String,
    pub languages: Vec<String>,
    pub config: serde_json::Value,
}

/// Options for listing workflow templates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowTemplatesListOptions {
    /// `Some(0)` lists templates outside any group
    pub group_id: Option<u64>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for WorkflowTemplatesListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_some("groupId", self.group_id);
        v.finish()
    }
}

/// Options for listing strings sitting in a workflow step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStepStringsListOptions {
    pub language_ids: Vec<String>,
    pub order_by: Option<String>,
    /// `todo`, `done`, `pending`, `incomplete` or `need_review`
    pub status: Option<String>,
    pub croql: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for WorkflowStepStringsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_joined("languageIds", &self.language_ids);
        v.add_str("orderBy", self.order_by.as_deref());
        v.add_str("status", self.status.as_deref());
        v.add_str("croql", self.croql.as_deref());
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_list_options() {
        let nil: Option<&WorkflowTemplatesListOptions> = None;
        assert!(!nil.values().1);
        assert!(!WorkflowTemplatesListOptions::default().values().1);

        let opts = WorkflowTemplatesListOptions {
            group_id: Some(0),
            ..Default::default()
        };
        assert_eq!(opts.values().0.encode(), "groupId=0");
    }

    #[test]
    fn test_step_strings_list_options() {
        let opts = WorkflowStepStringsListOptions {
            language_ids: vec!["uk".into(), "de".into()],
            order_by: Some("id".into()),
            status: Some("todo".into()),
            croql: None,
            list_options: ListOptions::new(0, 0),
        };
        assert_eq!(opts.values().0.encode(), "languageIds=uk%2Cde&orderBy=id&status=todo");
    }

    #[test]
    fn test_workflow_step_deserialize() {
        let step: WorkflowStep = serde_json::from_str(
            r#"{"id": 313, "title": "Translate", "type": "Translate", "languages": ["uk"],
                "config": {"assignees": {"uk": [2]}}}"#,
        )
        .unwrap();
        assert_eq!(step.r#type, "Translate");
        assert_eq!(step.config["assignees"]["uk"][0], 2);
    }
}
