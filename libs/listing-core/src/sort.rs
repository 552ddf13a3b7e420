use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::{resolve_record, FieldPath, FieldValue};
use crate::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Strict parse of `asc` / `desc` (case-insensitive).
    pub fn parse(raw: &str) -> Result<Self, Error> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            _ => Err(Error::InvalidSortDirection(raw.to_string())),
        }
    }

    /// Unknown tokens fall back to ascending.
    pub fn parse_lossy(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    pub fn reverse(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortKey {
    pub field: FieldPath,
    pub dir: SortDir,
}

impl SortKey {
    pub fn new(field: impl Into<FieldPath>, dir: SortDir) -> Self {
        Self {
            field: field.into(),
            dir,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.field.is_empty()
    }
}

/// Ascending comparison where a missing value is greater than any present
/// value, so it lands last in ascending and first in descending order.
pub fn compare_missing_last(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of `items` by the value at `key.field`.
///
/// An empty field path returns `items` untouched. Each record is resolved
/// once; equal keys keep their input order in both directions.
pub fn sort_by_path<R: Serialize>(items: Vec<R>, key: &SortKey) -> Vec<R> {
    if key.is_none() {
        return items;
    }

    let mut keyed: Vec<(Option<FieldValue>, R)> = items
        .into_iter()
        .map(|item| (resolve_record(&item, &key.field), item))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| key.dir.apply(compare_missing_last(a.as_ref(), b.as_ref())));

    keyed.into_iter().map(|(_, item)| item).collect()
}
