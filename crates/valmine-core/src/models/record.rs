//! The assembled extraction record.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Marker for a field that was looked up but could not be resolved.
pub const SENTINEL: &str = "N/A";

/// An ordered field-name to value mapping produced for one document.
///
/// The record always holds exactly the fields of the schema it was
/// assembled from, in schema order, regardless of input. Serializes as a
/// map with that order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionRecord {
    fields: Vec<(String, String)>,
}

impl ExtractionRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create an empty record with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set a field value, appending the field if it is new and replacing
    /// the value in place (order unchanged) if it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the named field is present but unresolved.
    pub fn is_sentinel(&self, name: &str) -> bool {
        self.get(name) == Some(SENTINEL)
    }

    /// Number of fields holding the sentinel.
    pub fn sentinel_count(&self) -> usize {
        self.fields.iter().filter(|(_, v)| v == SENTINEL).count()
    }

    /// Field names in record order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Field values in record order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// (name, value) pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ExtractionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut record = ExtractionRecord::new();
        record.insert("B_FIELD", "1");
        record.insert("A_FIELD", "2");
        record.insert("C_FIELD", SENTINEL);

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["B_FIELD", "A_FIELD", "C_FIELD"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut record = ExtractionRecord::new();
        record.insert("X", SENTINEL);
        record.insert("Y", "kept");
        record.insert("X", "resolved");

        assert_eq!(record.get("X"), Some("resolved"));
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["X", "Y"]);
    }

    #[test]
    fn test_sentinel_count() {
        let mut record = ExtractionRecord::new();
        record.insert("A", "value");
        record.insert("B", SENTINEL);
        record.insert("C", SENTINEL);

        assert_eq!(record.sentinel_count(), 2);
        assert!(record.is_sentinel("B"));
        assert!(!record.is_sentinel("A"));
        assert!(!record.is_sentinel("MISSING"));
    }

    #[test]
    fn test_serialize_keeps_field_order() {
        let mut record = ExtractionRecord::new();
        record.insert("ZULU", "1");
        record.insert("ALPHA", "2");

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"ZULU":"1","ALPHA":"2"}"#);
    }
}
