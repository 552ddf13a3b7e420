use listing_core::{resolve_record, FieldPath};
use serde::Serialize;

use crate::contract::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Image,
    Text,
    Number,
}

/// One column of the user table: header, the field path it shows, and
/// whether the list can be sorted by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnModel {
    pub name: &'static str,
    pub is_sortable: bool,
    pub key: &'static str,
    pub kind: ColumnKind,
}

const USER_COLUMNS: &[ColumnModel] = &[
    ColumnModel {
        name: "Picture",
        is_sortable: false,
        key: "picture.thumbnail",
        kind: ColumnKind::Image,
    },
    ColumnModel {
        name: "First name",
        is_sortable: true,
        key: "name.first",
        kind: ColumnKind::Text,
    },
    ColumnModel {
        name: "Last name",
        is_sortable: true,
        key: "name.last",
        kind: ColumnKind::Text,
    },
    ColumnModel {
        name: "Email",
        is_sortable: true,
        key: "email",
        kind: ColumnKind::Text,
    },
    ColumnModel {
        name: "Age",
        is_sortable: true,
        key: "dob.age",
        kind: ColumnKind::Number,
    },
    ColumnModel {
        name: "Country",
        is_sortable: true,
        key: "location.country",
        kind: ColumnKind::Text,
    },
    ColumnModel {
        name: "Phone",
        is_sortable: false,
        key: "phone",
        kind: ColumnKind::Text,
    },
];

pub fn user_columns() -> &'static [ColumnModel] {
    USER_COLUMNS
}

/// Whether `key` is the field path of a sortable column. Sorting by other
/// paths still works; this only drives what the UI offers.
pub fn is_sortable_key(key: &str) -> bool {
    USER_COLUMNS.iter().any(|c| c.is_sortable && c.key == key)
}

impl ColumnModel {
    /// Display text of this column for `user`; empty when the path is absent.
    pub fn cell(&self, user: &User) -> String {
        resolve_record(user, &FieldPath::parse(self.key))
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}
