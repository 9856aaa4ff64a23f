//! Per-field validation messages.
//!
//! [`FieldErrors`] is the explicit stand-in for "the current model's
//! errors": callers collect messages per field name and pass the map to the
//! form context, which looks each field up by its own name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Validation messages keyed by field name.
///
/// Field insertion order and message order are both preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        if let Some((_, messages)) = self.entries.iter_mut().find(|(name, _)| *name == field) {
            messages.push(message);
        } else {
            self.entries.push((field, vec![message]));
        }
    }

    /// Returns the messages for `field`, or an empty slice.
    pub fn get(&self, field: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the first message for `field`.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    /// Returns `true` if no field has any messages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of fields with messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(field, messages)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }
}

impl From<HashMap<String, Vec<String>>> for FieldErrors {
    /// Builds an error map from a form's `errors()` dictionary. Fields are
    /// sorted by name since the source map has no order.
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        let mut entries: Vec<(String, Vec<String>)> = map
            .into_iter()
            .filter(|(_, messages)| !messages.is_empty())
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }
}

impl<F: Into<String>, M: Into<String>> FromIterator<(F, M)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.add(field, message);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut errors = FieldErrors::new();
        errors.add("zip", "can't be blank");
        errors.add("zip", "is not a number");
        assert_eq!(
            errors.get("zip"),
            &["can't be blank".to_string(), "is not a number".to_string()]
        );
        assert_eq!(errors.first("zip"), Some("can't be blank"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_missing_field_is_empty() {
        let errors = FieldErrors::new();
        assert!(errors.get("street").is_empty());
        assert_eq!(errors.first("street"), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_lookup_is_per_field() {
        let errors: FieldErrors = [("zip", "can't be blank"), ("street", "is too short")]
            .into_iter()
            .collect();
        assert_eq!(errors.first("zip"), Some("can't be blank"));
        assert_eq!(errors.first("street"), Some("is too short"));
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let errors: FieldErrors = [("zip", "a"), ("street", "b"), ("zip", "c")]
            .into_iter()
            .collect();
        let names: Vec<&str> = errors.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zip", "street"]);
    }

    #[test]
    fn test_from_hash_map_sorts_and_drops_empty() {
        let mut map = HashMap::new();
        map.insert("zip".to_string(), vec!["can't be blank".to_string()]);
        map.insert("city".to_string(), vec![]);
        map.insert("street".to_string(), vec!["is too short".to_string()]);
        let errors = FieldErrors::from(map);
        let names: Vec<&str> = errors.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["street", "zip"]);
    }
}
