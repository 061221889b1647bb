//! The derived, chart-facing record types: `ChartRecord` and `CategoryLabel`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A category title paired with its assigned display color.
///
/// Derived, not input. One exists per distinct category title across all projects, in the
/// order the titles were first seen.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryLabel {
    title: String,
    color: String,
}

impl CategoryLabel {
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// The chart-ready representation of one project: its name plus a full-width value per category
/// title, in the shared category order.
///
/// The per-category values are held as an explicit ordered mapping rather than dynamic struct
/// fields, so consumers get a typed, enumerable structure. Serialization flattens the record
/// into the form charting components expect:
///
/// ```json
/// { "name": "Alpha", "Food": 15.0, "Travel": 20.0, "Rent": 0.0 }
/// ```
///
/// A category literally titled `name` would collide with the name key in that flat form; the
/// typed accessors are unaffected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartRecord {
    name: String,
    values: Vec<(String, f64)>,
}

impl ChartRecord {
    pub(crate) fn new(name: impl Into<String>, values: Vec<(String, f64)>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The project's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The (category title, spend) pairs, in the shared category order.
    pub fn values(&self) -> &[(String, f64)] {
        &self.values
    }

    /// Looks up the spend for one category title.
    pub fn value(&self, title: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, v)| *v)
    }
}

impl Serialize for ChartRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("name", &self.name)?;
        for (title, value) in &self.values {
            map.serialize_entry(title, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chart_record_lookup() {
        let record = ChartRecord::new(
            "Alpha",
            vec![("Food".to_string(), 15.0), ("Rent".to_string(), 0.0)],
        );
        assert_eq!(record.name(), "Alpha");
        assert_eq!(record.value("Food"), Some(15.0));
        assert_eq!(record.value("Rent"), Some(0.0));
        assert_eq!(record.value("Travel"), None);
    }

    #[test]
    fn test_chart_record_serializes_flat() {
        let record = ChartRecord::new(
            "Alpha",
            vec![("Food".to_string(), 15.0), ("Travel".to_string(), 20.0)],
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({ "name": "Alpha", "Food": 15.0, "Travel": 20.0 })
        );
    }

    #[test]
    fn test_chart_record_serializes_keys_in_order() {
        let record = ChartRecord::new(
            "Alpha",
            vec![("Zebra".to_string(), 1.0), ("Apple".to_string(), 2.0)],
        );
        let s = serde_json::to_string(&record).unwrap();
        assert_eq!(s, r#"{"name":"Alpha","Zebra":1.0,"Apple":2.0}"#);
    }

    #[test]
    fn test_category_label_serde() {
        let label = CategoryLabel::new("Food", "#8884d8");
        let value = serde_json::to_value(&label).unwrap();
        assert_eq!(value, json!({ "title": "Food", "color": "#8884d8" }));
    }
}
