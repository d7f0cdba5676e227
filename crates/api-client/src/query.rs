//! Query-string encoding for list endpoints
//!
//! List options implement [`ListOptionsProvider`], rendering their populated
//! fields into [`Values`]. Zero-valued or absent filters are skipped, slices
//! are comma-joined, and tri-state filters outside {0, 1} are silently
//! dropped. Encoding never fails.

use std::collections::BTreeMap;
use std::fmt::Display;
use url::form_urlencoded;

/// Multi-map of query parameters, kept sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    inner: BTreeMap<String, Vec<String>>,
}

impl Values {
    /// Create an empty set of parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`
    pub fn add(&mut self, key: &str, value: impl Display) {
        self.inner
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// Replace all values under `key`
    pub fn set(&mut self, key: &str, value: impl Display) {
        self.inner.insert(key.to_string(), vec![value.to_string()]);
    }

    /// First value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Whether `key` is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no parameter was produced
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Render as `key=value&...`, sorted by key, percent-encoded
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Pair the parameters with whether any was produced
    #[must_use]
    pub fn finish(self) -> (Self, bool) {
        let has = !self.is_empty();
        (self, has)
    }

    /// Add a string filter when present and non-empty
    pub fn add_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.add(key, v);
        }
    }

    /// Add a numeric filter when present and positive
    pub fn add_positive(&mut self, key: &str, value: Option<u64>) {
        if let Some(v) = value.filter(|v| *v > 0) {
            self.add(key, v);
        }
    }

    /// Add a filter whenever it is set, zero included
    pub fn add_some(&mut self, key: &str, value: Option<impl Display>) {
        if let Some(v) = value {
            self.add(key, v);
        }
    }

    /// Add a tri-state filter when set to 0 or 1
    pub fn add_flag(&mut self, key: &str, value: Option<u8>) {
        if let Some(v) = value.filter(|v| *v <= 1) {
            self.add(key, v);
        }
    }

    /// Add a slice filter as a single comma-joined value
    pub fn add_joined<T: Display>(&mut self, key: &str, values: &[T]) {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.add(key, joined);
        }
    }

    /// Add a boolean filter when set
    pub fn add_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.add(key, v);
        }
    }
}

/// Capability of rendering list/search options as query parameters.
pub trait ListOptionsProvider {
    /// Produce the parameters and whether any was produced
    fn values(&self) -> (Values, bool);
}

impl<T: ListOptionsProvider> ListOptionsProvider for Option<T> {
    fn values(&self) -> (Values, bool) {
        match self {
            Some(inner) => inner.values(),
            None => (Values::new(), false),
        }
    }
}

impl<T: ListOptionsProvider + ?Sized> ListOptionsProvider for &T {
    fn values(&self) -> (Values, bool) {
        (**self).values()
    }
}

/// Shared pagination options for every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Maximum number of items to retrieve (API default 25, maximum 500)
    pub limit: Option<u32>,
    /// Starting offset in the collection
    pub offset: Option<u32>,
}

impl ListOptions {
    /// Pagination with the given limit and offset
    #[must_use]
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

impl ListOptionsProvider for ListOptions {
    fn values(&self) -> (Values, bool) {
        let mut v = Values::new();
        v.add_positive("limit", self.limit.map(u64::from));
        v.add_positive("offset", self.offset.map(u64::from));
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_nil() {
        let opts: Option<&ListOptions> = None;
        let (v, ok) = opts.values();
        assert!(!ok);
        assert!(v.is_empty());
    }

    #[test]
    fn test_list_options_values() {
        let (v, ok) = ListOptions::new(10, 5).values();
        assert!(ok);
        assert_eq!(v.encode(), "limit=10&offset=5");

        let (v, ok) = ListOptions::default().values();
        assert!(!ok);
        assert_eq!(v.encode(), "");

        let (v, ok) = ListOptions::new(0, 0).values();
        assert!(!ok);
        assert!(v.is_empty());
    }

    #[test]
    fn test_encode_is_sorted_and_escaped() {
        let mut v = Values::new();
        v.add("orderBy", "createdAt desc");
        v.add("labelIds", "1,2,3");
        v.add("croql", "text contains \"a&b\"");
        assert_eq!(
            v.encode(),
            "croql=text+contains+%22a%26b%22&labelIds=1%2C2%2C3&orderBy=createdAt+desc"
        );
        assert_eq!(v.get("labelIds"), Some("1,2,3"));
    }

    #[test]
    fn test_helpers_skip_unset() {
        let mut v = Values::new();
        v.add_str("name", None);
        v.add_str("name", Some(""));
        v.add_positive("branchId", Some(0));
        v.add_positive("branchId", None);
        v.add_flag("isSystem", Some(2));
        v.add_joined::<u64>("stringIds", &[]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_helpers_emit_set_values() {
        let mut v = Values::new();
        v.add_some("groupId", Some(0u64));
        v.add_flag("isSystem", Some(0));
        v.add_joined("stringIds", &[1u64, 2, 3]);
        v.add_bool("recursion", Some(true));
        assert_eq!(v.get("groupId"), Some("0"));
        assert_eq!(v.get("isSystem"), Some("0"));
        assert_eq!(v.get("stringIds"), Some("1,2,3"));
        assert_eq!(v.get("recursion"), Some("true"));
    }

    #[test]
    fn test_set_replaces() {
        let mut v = Values::new();
        v.add("status", "todo");
        v.add("status", "done");
        assert_eq!(v.iter().count(), 2);
        v.set("status", "closed");
        assert_eq!(v.encode(), "status=closed");
    }
}
