//! Dot-path extraction over dynamic JSON items.
//!
//! Enables ranking collections of `serde_json::Value` with string key
//! paths, mirroring how the engine is typically fed from deserialized
//! API payloads:
//!
//! ```
//! use casematch::{Key, MatchOptions, match_sort};
//! use serde_json::{Value, json};
//!
//! let items = vec![
//!     json!({"name": "Item One"}),
//!     json!({"name": "Item Two"}),
//! ];
//! let opts = MatchOptions {
//!     keys: vec![Key::<Value>::path("name")],
//!     ..Default::default()
//! };
//! let results = match_sort(&items, "two", opts);
//! assert_eq!(results, vec![&items[1]]);
//! ```

use serde_json::Value;

use crate::key::PathExtract;
use crate::no_keys::AsMatchStr;

impl PathExtract for Value {
    fn values_at(&self, path: &str) -> Option<Vec<String>> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        match current {
            Value::Null => None,
            Value::String(s) => Some(vec![s.clone()]),
            // Multi-valued fields rank element-wise; non-scalar elements
            // contribute nothing.
            Value::Array(values) => Some(values.iter().filter_map(scalar_to_string).collect()),
            other => scalar_to_string(other).map(|s| vec![s]),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl AsMatchStr for Value {
    /// The string content of this value, or `""` for non-strings.
    fn as_match_str(&self) -> &str {
        self.as_str().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_top_level_string() {
        let item = json!({"name": "Ada"});
        assert_eq!(item.values_at("name"), Some(vec!["Ada".to_owned()]));
    }

    #[test]
    fn resolves_nested_path() {
        let item = json!({"author": {"name": "Ada"}});
        assert_eq!(item.values_at("author.name"), Some(vec!["Ada".to_owned()]));
    }

    #[test]
    fn absent_intermediate_yields_none() {
        let item = json!({"author": {"name": "Ada"}});
        assert_eq!(item.values_at("editor.name"), None);
        assert_eq!(item.values_at("author.name.first"), None);
    }

    #[test]
    fn null_leaf_yields_none() {
        let item = json!({"name": null});
        assert_eq!(item.values_at("name"), None);
    }

    #[test]
    fn array_leaf_passes_through_element_wise() {
        let item = json!({"tags": ["alpha", "beta"]});
        assert_eq!(
            item.values_at("tags"),
            Some(vec!["alpha".to_owned(), "beta".to_owned()])
        );
    }

    #[test]
    fn array_skips_non_scalar_elements() {
        let item = json!({"tags": ["alpha", null, {"x": 1}, ["y"]]});
        assert_eq!(item.values_at("tags"), Some(vec!["alpha".to_owned()]));
    }

    #[test]
    fn numbers_and_bools_stringify() {
        let item = json!({"version": 42, "stable": true});
        assert_eq!(item.values_at("version"), Some(vec!["42".to_owned()]));
        assert_eq!(item.values_at("stable"), Some(vec!["true".to_owned()]));
    }

    #[test]
    fn path_through_array_yields_none() {
        // Arrays have no named fields to walk through.
        let item = json!({"tags": ["alpha"]});
        assert_eq!(item.values_at("tags.name"), None);
    }

    #[test]
    fn as_match_str_returns_string_content() {
        let item = json!("hello");
        assert_eq!(item.as_match_str(), "hello");
    }

    #[test]
    fn as_match_str_empty_for_non_strings() {
        assert_eq!(json!(42).as_match_str(), "");
        assert_eq!(json!({"a": 1}).as_match_str(), "");
    }
}
