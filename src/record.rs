//! Row records and accessor resolution.
//!
//! Input rows are opaque records: any type implementing [`Record`] supports
//! field-name lookups, and closure accessors bypass the trait entirely. An
//! [`Accessor`] is a tagged choice between the two, resolved once per render
//! call into a uniform callable rather than dispatched per-row.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// A record whose fields can be read by name.
pub trait Record {
    /// Resolve a field to a number, if present and numeric.
    ///
    /// Numeric strings parse like numbers, so CSV-shaped data works without
    /// an upfront conversion pass. Anything unparseable is `None`, which
    /// filters the row out downstream.
    fn number(&self, field: &str) -> Option<f64>;

    /// Resolve a field to text, if present.
    fn text(&self, field: &str) -> Option<String>;
}

impl Record for Value {
    fn number(&self, field: &str) -> Option<f64> {
        match self.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl Record for BTreeMap<String, f64> {
    fn number(&self, field: &str) -> Option<f64> {
        self.get(field).copied()
    }

    fn text(&self, field: &str) -> Option<String> {
        self.get(field).map(f64::to_string)
    }
}

impl Record for HashMap<String, f64> {
    fn number(&self, field: &str) -> Option<f64> {
        self.get(field).copied()
    }

    fn text(&self, field: &str) -> Option<String> {
        self.get(field).map(f64::to_string)
    }
}

/// Numeric accessor: a field name or a function of the row.
pub enum NumberAccessor<'a, T> {
    /// Look the value up on the row by field name.
    Field(String),
    /// Compute the value from the row.
    With(Box<dyn Fn(&T) -> f64 + 'a>),
}

impl<'a, T> NumberAccessor<'a, T> {
    /// Accessor that looks the value up by field name.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Accessor that computes the value from the row.
    #[must_use]
    pub fn with(f: impl Fn(&T) -> f64 + 'a) -> Self {
        Self::With(Box::new(f))
    }
}

impl<'a, T: Record> NumberAccessor<'a, T> {
    /// Resolve into a uniform callable. Missing or unparseable fields
    /// become `NaN`, which the row filter drops.
    pub(crate) fn resolved(&self) -> Box<dyn Fn(&T) -> f64 + '_> {
        match self {
            Self::Field(name) => Box::new(move |row| row.number(name).unwrap_or(f64::NAN)),
            Self::With(f) => Box::new(f),
        }
    }
}

impl<'a, T> From<&str> for NumberAccessor<'a, T> {
    fn from(field: &str) -> Self {
        Self::Field(field.to_string())
    }
}

impl<'a, T> From<String> for NumberAccessor<'a, T> {
    fn from(field: String) -> Self {
        Self::Field(field)
    }
}

/// Text accessor: a field name or a function of the row.
///
/// Used for row identifiers and per-point labels; returning `None` means
/// "no value" (a label accessor returning `None` draws no label).
pub enum TextAccessor<'a, T> {
    /// Look the value up on the row by field name.
    Field(String),
    /// Compute the value from the row.
    With(Box<dyn Fn(&T) -> Option<String> + 'a>),
}

impl<'a, T> TextAccessor<'a, T> {
    /// Accessor that looks the value up by field name.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Accessor that computes the value from the row.
    #[must_use]
    pub fn with(f: impl Fn(&T) -> Option<String> + 'a) -> Self {
        Self::With(Box::new(f))
    }
}

impl<'a, T: Record> TextAccessor<'a, T> {
    pub(crate) fn resolved(&self) -> Box<dyn Fn(&T) -> Option<String> + '_> {
        match self {
            Self::Field(name) => Box::new(move |row| row.text(name)),
            Self::With(f) => Box::new(f),
        }
    }
}

impl<'a, T> From<&str> for TextAccessor<'a, T> {
    fn from(field: &str) -> Self {
        Self::Field(field.to_string())
    }
}

impl<'a, T> From<String> for TextAccessor<'a, T> {
    fn from(field: String) -> Self {
        Self::Field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_number_field() {
        let row = json!({"gdp": 1.25, "name": "a"});
        assert_eq!(row.number("gdp"), Some(1.25));
    }

    #[test]
    fn test_json_numeric_string_parses() {
        let row = json!({"gdp": " 3.5 "});
        assert_eq!(row.number("gdp"), Some(3.5));
    }

    #[test]
    fn test_json_non_numeric_is_none() {
        let row = json!({"gdp": "not a number", "flag": true});
        assert_eq!(row.number("gdp"), None);
        assert_eq!(row.number("flag"), None);
        assert_eq!(row.number("missing"), None);
    }

    #[test]
    fn test_json_text_field() {
        let row = json!({"name": "denmark", "rank": 3});
        assert_eq!(row.text("name").as_deref(), Some("denmark"));
        assert_eq!(row.text("rank").as_deref(), Some("3"));
    }

    #[test]
    fn test_number_accessor_field_resolution() {
        let acc: NumberAccessor<'_, Value> = "x".into();
        let get = acc.resolved();
        assert_eq!(get(&json!({"x": 2.0})), 2.0);
        assert!(get(&json!({"x": "bad"})).is_nan());
    }

    #[test]
    fn test_number_accessor_closure() {
        let acc: NumberAccessor<'_, Value> =
            NumberAccessor::with(|row: &Value| row.number("x").unwrap_or(0.0) * 2.0);
        let get = acc.resolved();
        assert_eq!(get(&json!({"x": 21.0})), 42.0);
    }

    #[test]
    fn test_map_record() {
        let mut row = BTreeMap::new();
        row.insert("x".to_string(), 7.0);
        assert_eq!(row.number("x"), Some(7.0));
        assert_eq!(row.number("y"), None);
    }
}
