//! Caller attribute bag (ABAC inputs).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether an attribute value counts as "present" for gating.
///
/// Absent: `null`, `false`, numeric zero, `""`, `[]`, `{}`.
/// Everything else is present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Key → value bag describing the caller's context (assigned classes,
/// enrolled courses, onboarding state, ...).
///
/// Keys are consumer-defined; only presence matters to the attribute filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag(BTreeMap<String, Value>);

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Missing keys are absent.
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_present)
    }

    /// `Some(b)` only for an explicit JSON boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// True when `key` holds a non-empty list.
    pub fn has_items(&self, key: &str) -> bool {
        self.get(key)
            .and_then(Value::as_array)
            .is_some_and(|items| !items.is_empty())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for AttributeBag {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl TryFrom<Value> for AttributeBag {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn presence_rules() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!([])));
        assert!(!is_present(&json!({})));
        assert!(!is_present(&json!(false)));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(0.0)));

        assert!(is_present(&json!("x")));
        assert!(is_present(&json!(["c1"])));
        assert!(is_present(&json!({"k": 1})));
        assert!(is_present(&json!(true)));
        assert!(is_present(&json!(3)));
        assert!(is_present(&json!(-1.5)));
    }

    #[test]
    fn missing_key_is_absent() {
        let bag = AttributeBag::new().with("assignedClasses", json!(["c1"]));
        assert!(bag.is_present("assignedClasses"));
        assert!(!bag.is_present("assignedLeads"));
    }

    #[test]
    fn typed_getters() {
        let bag = AttributeBag::new()
            .with("isOnboardingComplete", true)
            .with("onboardingStatus", "COMPLETED")
            .with("enrolledCourses", json!(["c1", "c2"]))
            .with("hasEnrollment", "yes");
        assert_eq!(bag.get_bool("isOnboardingComplete"), Some(true));
        assert_eq!(bag.get_bool("hasEnrollment"), None);
        assert_eq!(bag.get_str("onboardingStatus"), Some("COMPLETED"));
        assert!(bag.has_items("enrolledCourses"));
        assert!(!bag.has_items("onboardingStatus"));
    }

    #[test]
    fn deserializes_from_json_object() {
        let bag: AttributeBag =
            serde_json::from_value(json!({"assignedLeads": [1, 2], "team": ""})).unwrap();
        assert_eq!(bag.len(), 2);
        assert!(bag.is_present("assignedLeads"));
        assert!(!bag.is_present("team"));
        assert!(AttributeBag::try_from(json!([1])).is_err());
    }
}
