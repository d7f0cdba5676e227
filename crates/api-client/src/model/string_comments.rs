//! String comments and issues

use crate::error::ValidationError;
use crate::query::{ListOptions, ListOptionsProvider, Values};
use crate::serde_helpers::int_or_string;
use crate::validate::{one_of, Validate};
use serde::{Deserialize, Serialize};

const COMMENT_TYPES: &[&str] = &["comment", "issue"];
const ISSUE_TYPES: &[&str] = &[
    "general_question",
    "translation_mistake",
    "context_request",
    "source_mistake",
];

/// Comment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentType {
    Comment,
    Issue,
}

impl CommentType {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Issue => "issue",
        }
    }
}

impl From<CommentType> for String {
    fn from(t: CommentType) -> Self {
        t.as_str().to_string()
    }
}

/// Issue category of an `issue` comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    GeneralQuestion,
    TranslationMistake,
    ContextRequest,
    SourceMistake,
}

impl IssueType {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GeneralQuestion => "general_question",
            Self::TranslationMistake => "translation_mistake",
            Self::ContextRequest => "context_request",
            Self::SourceMistake => "source_mistake",
        }
    }
}

impl From<IssueType> for String {
    fn from(t: IssueType) -> Self {
        t.as_str().to_string()
    }
}

/// A comment or issue on a string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StringComment {
    pub id: u64,
    pub is_shared: Option<bool>,
    pub text: String,
    /// Rendered as a number or a numeric string depending on the endpoint
    #[serde(deserialize_with = "int_or_string")]
    pub user_id: u64,
    pub string_id: u64,
    pub user: Option<CommentUser>,
    pub string: Option<CommentedString>,
    pub language_id: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub issue_type: Option<String>,
    pub issue_status: Option<String>,
    pub resolver_id: Option<u64>,
    pub resolver: Option<CommentUser>,
    pub resolved_at: Option<String>,
    pub created_at: Option<String>,
}

/// Author or resolver of a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentUser {
    pub id: u64,
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Summary of the commented string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentedString {
    pub id: u64,
    pub text: String,
    pub r#type: Option<String>,
    pub has_plurals: bool,
    pub is_icu: bool,
    pub context: Option<String>,
    pub file_id: Option<u64>,
}

/// Options for listing string comments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringCommentsListOptions {
    pub string_id: Option<u64>,
    /// See [`CommentType`]
    pub r#type: Option<String>,
    /// See [`IssueType`]
    pub issue_type: Vec<String>,
    /// `resolved` or `unresolved`
    pub issue_status: Option<String>,
    pub list_options: ListOptions,
}

impl ListOptionsProvider for StringCommentsListOptions {
    fn values(&self) -> (Values, bool) {
        let (mut v, _) = self.list_options.values();
        v.add_positive("stringId", self.string_id);
        v.add_str("type", self.r#type.as_deref());
        v.add_joined("issueType", &self.issue_type);
        v.add_str("issueStatus", self.issue_status.as_deref());
        v.finish()
    }
}

/// Add a comment or issue to a string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringCommentsAddRequest {
    pub string_id: u64,
    pub target_language_id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
}

impl Validate for StringCommentsAddRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.string_id == 0 {
            return Err(ValidationError::required("stringId"));
        }
        if self.target_language_id.is_empty() {
            return Err(ValidationError::required("targetLanguageId"));
        }
        if self.text.is_empty() {
            return Err(ValidationError::required("text"));
        }
        if self.r#type.is_empty() {
            return Err(ValidationError::required("type"));
        }
        one_of("type", &self.r#type, COMMENT_TYPES)?;
        if self.r#type == CommentType::Issue.as_str() {
            match self.issue_type.as_deref() {
                None | Some("") => return Err(ValidationError::required("issueType")),
                Some(issue_type) => one_of("issueType", issue_type, ISSUE_TYPES)?,
            }
        }
        Ok(())
    }
}
