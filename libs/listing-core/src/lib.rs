//! Client-side listing primitives: dotted field paths, a total order over
//! resolved values, stable sorting, and page slicing.
//!
//! Nothing here knows about users; records participate by being serializable
//! (see [`path::resolve_record`]) or by handing in a `serde_json::Value`.

pub mod page;
pub mod path;
pub mod sort;
pub mod text;


pub use page::{paginate, total_pages, Page, PageInfo};
pub use path::{resolve, resolve_record, FieldPath, FieldValue};
pub use sort::{compare_missing_last, sort_by_path, SortDir, SortKey};
pub use text::includes_ignoring_case;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(String),
}
