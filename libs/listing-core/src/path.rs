use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A dot-delimited path into a record, e.g. `name.first` or `dob.age`.
///
/// The empty string parses into the empty path, which the sort stage treats as
/// "no sort".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
}

impl FieldPath {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            raw: raw.trim().to_string(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.')
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        Self::parse(s)
    }
}

/// A scalar resolved from a record, usable as a sort key.
///
/// Ordering is total: values of different kinds order as
/// `Bool < Number < Text`, numbers use IEEE total ordering, text compares by
/// code point.
#[derive(Clone, Debug)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }

    /// Convert a JSON scalar. `null`, arrays and objects have no sort value.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::Number(n) => n.as_f64().map(FieldValue::Number),
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue {}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Walk `path` through `root`. Stops with `None` as soon as a segment is
/// absent or an intermediate value is not an object.
pub fn resolve(root: &Value, path: &FieldPath) -> Option<FieldValue> {
    if path.is_empty() {
        return None;
    }
    let mut current = root;
    for segment in path.segments() {
        current = current.as_object()?.get(segment)?;
    }
    FieldValue::from_json(current)
}

/// Resolve `path` against the JSON form of a serializable record.
pub fn resolve_record<T: Serialize>(record: &T, path: &FieldPath) -> Option<FieldValue> {
    let value = serde_json::to_value(record).ok()?;
    resolve(&value, path)
}
