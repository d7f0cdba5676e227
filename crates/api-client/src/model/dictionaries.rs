//! Spell-check dictionaries

use crate::query::{ListOptionsProvider, Values};
use serde::{Deserialize, Serialize};

/// Words a project accepts for one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dictionary {
    pub language_id: String,
    pub words: Vec<String>,
}

/// Options for listing dictionaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionariesListOptions {
    pub language_ids: Vec<String>,
}

impl ListOptionsProvider for DictionariesListOptions {
    fn values(&self) -> (Values, bool) {
        let mut v = Values::new();
        v.add_joined("languageIds", &self.language_ids);
        v.finish()
    }
}
