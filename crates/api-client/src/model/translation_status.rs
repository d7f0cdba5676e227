//! Translation progress and QA checks

use crate::query::{ListOptions, ListOptionsProvider, Values};
use serde::{Deserialize, Serialize};

/// Word and phrase counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressCounts {
    pub total: u64,
    pub translated: u64,
    pub approved: u64,
    pub pre_translate_applied_to: u64,
}

/// Progress of a branch, directory, file or language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationProgress {
    pub words: ProgressCounts,
    pub phrases: ProgressCounts,
    pub translation_progress: u8,
    pub approval_progress: u8,
    pub language_id: Option<String>,
    pub file_id: Option<u64>,
    pub branch_id: Option<u64>,
    pub directory_id: Option<u64>,
    pub eta_seconds: Option<u64>,
}

/// A QA issue found in a translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QaCheck {
    pub string_id: u64,
    pub language_id: String,
    pub category: String,
    pub category_description: String,
    pub validation: String,
    pub validation_description: String,
    pub plural_id: u64,
    pub text: String,
}

/// Options for listing QA check issues
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QaChecksListOptions {
    /// Comma-separated in the query, e.g. `variables,tags`
    pub category: Vec<String>,
    pub validation: Vec<String>,
    pub language_ids: Vec<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for QaChecksListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_joined("category", &self.category);
        v.add_joined("validation", &self.validation);
        v.add_joined("languageIds", &self.language_ids);
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qa_checks_list_options() {
        let nil: Option<&QaChecksListOptions> = None;
        assert!(!nil.values().1);
        assert!(!QaChecksListOptions::default().values().1);

        let opts = QaChecksListOptions {
            category: vec!["variables".into(), "tags".into()],
            language_ids: vec!["uk".into()],
            ..Default::default()
        };
        let (v, has) = opts.values();
        assert!(has);
        assert_eq!(v.get("category"), Some("variables,tags"));
        assert_eq!(v.encode(), "category=variables%2Ctags&languageIds=uk");
    }

    #[test]
    fn test_progress_deserialize() {
        let p: TranslationProgress = serde_json::from_str(
            r#"{
                "words": {"total": 7249, "translated": 3651, "approved": 3637},
                "phrases": {"total": 3041, "translated": 2631, "approved": 2622},
                "translationProgress": 86,
                "approvalProgress": 86,
                "languageId": "af"
            }"#,
        )
        .unwrap();
        assert_eq!(p.words.translated, 3651);
        assert_eq!(p.translation_progress, 86);
        assert_eq!(p.language_id.as_deref(), Some("af"));
    }
}
