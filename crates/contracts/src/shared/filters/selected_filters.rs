//! Selected filter values of the clients page.
//!
//! Every key maps to a non-empty list of strings, range filters use the
//! derived `<key>From` / `<key>To` keys. The map is persisted to
//! `localStorage` as JSON and restored against the fields of the current
//! client type, dropping keys that no longer exist.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Base keys of the filters shared by every client type.
pub struct StaticFilter;

impl StaticFilter {
    pub const CREATED_AT: &'static str = "createdAt";
    pub const UPDATED_AT: &'static str = "updatedAt";
    pub const SOURCE: &'static str = "source";
    pub const ACTIVE: &'static str = "active";
}

pub const STATIC_FILTER_KEYS: [&str; 6] = [
    "createdAtFrom",
    "createdAtTo",
    "updatedAtFrom",
    "updatedAtTo",
    "source",
    "active",
];

/// `("<key>From", "<key>To")`
pub fn range_keys(key: &str) -> (String, String) {
    (format!("{key}From"), format!("{key}To"))
}

fn is_static_key(key: &str) -> bool {
    STATIC_FILTER_KEYS.contains(&key)
}

fn belongs_to_field(key: &str, field_names: &[&str]) -> bool {
    field_names.iter().any(|name| {
        key == *name
            || key
                .strip_prefix(name)
                .is_some_and(|suffix| suffix == "From" || suffix == "To")
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedFilters(BTreeMap<String, Vec<String>>);

impl SelectedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the values of `key`. Blank values are dropped and an empty
    /// result removes the key.
    pub fn set(&mut self, key: impl Into<String>, values: Vec<String>) {
        let key = key.into();
        let values: Vec<String> = values
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        if values.is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, values);
        }
    }

    pub fn set_scalar(&mut self, key: impl Into<String>, value: &str) {
        self.set(key, vec![value.to_string()]);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.get(key)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    /// Lenient restore: scalar values are wrapped into one-element lists,
    /// non-string items are skipped and unreadable input yields no filters.
    pub fn from_json(raw: &str) -> Self {
        let Ok(parsed) = serde_json::from_str::<BTreeMap<String, Value>>(raw) else {
            return Self::default();
        };

        let mut out = Self::default();
        for (key, value) in parsed {
            let values = match value {
                Value::Array(items) => items.into_iter().filter_map(scalar_to_string).collect(),
                other => scalar_to_string(other).into_iter().collect(),
            };
            out.set(key, values);
        }
        out
    }

    /// Keep static keys, field names and their range keys; drop the rest.
    pub fn normalize(&self, field_names: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(key, _)| is_static_key(key) || belongs_to_field(key, field_names))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Drop every dynamic-field filter, e.g. when switching client type.
    pub fn retain_static(&mut self) {
        self.0.retain(|key, _| is_static_key(key));
    }

    /// Number of filters that differ from "any".
    pub fn active_count(&self) -> usize {
        self.0.len()
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SelectedFilters {
        let mut filters = SelectedFilters::new();
        filters.set("createdAtFrom", vec!["2024-01-01".into()]);
        filters.set("source", vec!["1".into(), "2".into()]);
        filters.set("region", vec!["3".into()]);
        filters.set("volumeFrom", vec!["10".into()]);
        filters.set("volumeTo", vec!["20".into()]);
        filters.set("removedField", vec!["x".into()]);
        filters.set("regionTo", vec!["oops".into()]);
        filters
    }

    #[test]
    fn normalization_keeps_static_fields_and_ranges() {
        let normalized = sample().normalize(&["region", "volume"]);
        let keys: Vec<&str> = normalized.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "createdAtFrom",
                "region",
                "regionTo",
                "source",
                "volumeFrom",
                "volumeTo"
            ]
        );
    }

    #[test]
    fn normalization_without_fields_keeps_only_static() {
        let normalized = sample().normalize(&[]);
        assert_eq!(normalized.len(), 2);
        assert!(normalized.get("source").is_some());
    }

    #[test]
    fn json_round_trip_reproduces_map() {
        let filters = sample();
        let restored = SelectedFilters::from_json(&filters.to_json());
        assert_eq!(restored, filters);
    }

    #[test]
    fn empty_values_never_stored() {
        let mut filters = SelectedFilters::new();
        filters.set("region", vec!["  ".into(), String::new()]);
        assert!(filters.is_empty());

        filters.set_scalar("active", "true");
        filters.set_scalar("active", "");
        assert!(filters.get("active").is_none());
    }

    #[test]
    fn lenient_restore() {
        assert!(SelectedFilters::from_json("not json").is_empty());
        assert!(SelectedFilters::from_json("[1,2]").is_empty());

        let restored =
            SelectedFilters::from_json(r#"{"active":"true","volumeFrom":[5],"region":[],"x":null}"#);
        assert_eq!(restored.first("active"), Some("true"));
        assert_eq!(restored.first("volumeFrom"), Some("5"));
        assert_eq!(restored.len(), 2);
    }

    #[test]
    fn switching_type_clears_dynamic_filters() {
        let mut filters = sample();
        filters.retain_static();
        assert_eq!(filters.len(), 2);
        assert!(filters.contains("source", "2"));
        assert_eq!(range_keys("updatedAt").1, "updatedAtTo");
    }
}
