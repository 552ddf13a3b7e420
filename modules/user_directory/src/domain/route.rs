//! View filters carried in a URL query string (`search`, `page`, `sortKey`,
//! `sortOrder`).
//!
//! Parsing never fails: malformed or missing values fall back to the
//! defaults (empty search, page 1, no sort key, ascending).

use listing_core::SortDir;
use url::form_urlencoded;

use crate::domain::view_state::{FilterUpdate, ViewState};

pub const SEARCH_PARAM: &str = "search";
pub const PAGE_PARAM: &str = "page";
pub const SORT_KEY_PARAM: &str = "sortKey";
pub const SORT_ORDER_PARAM: &str = "sortOrder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub search: String,
    pub page: i64,
    pub sort_key: String,
    pub sort_order: SortDir,
}

impl Default for RouteQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            sort_key: String::new(),
            sort_order: SortDir::Asc,
        }
    }
}

impl RouteQuery {
    /// Parse a query string, with or without the leading `?`. Later
    /// duplicates of a parameter win.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut route = Self::default();

        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            match name.as_ref() {
                SEARCH_PARAM => route.search = value.into_owned(),
                PAGE_PARAM => route.page = parse_page(&value),
                SORT_KEY_PARAM => route.sort_key = value.into_owned(),
                SORT_ORDER_PARAM => route.sort_order = SortDir::parse_lossy(&value),
                _ => {}
            }
        }

        route
    }

    /// Capture the current filters of `state`.
    pub fn from_state(state: &ViewState) -> Self {
        Self {
            search: state.search_query().to_string(),
            page: state.current_page(),
            sort_key: state.sort_key().to_string(),
            sort_order: state.sort_order(),
        }
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(SEARCH_PARAM, &self.search)
            .append_pair(PAGE_PARAM, &self.page.to_string())
            .append_pair(SORT_KEY_PARAM, &self.sort_key)
            .append_pair(SORT_ORDER_PARAM, self.sort_order.as_str())
            .finish()
    }

    pub fn with_page(&self, page: i64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn into_update(self) -> FilterUpdate {
        FilterUpdate {
            query: Some(self.search),
            page: Some(self.page),
            sort_key: Some(self.sort_key),
            sort_order: Some(self.sort_order),
        }
    }

    pub fn apply_to(self, state: &mut ViewState) {
        state.apply_filters(self.into_update());
    }
}

/// Leading-integer parse: optional sign then digits, rest ignored
/// (`"12abc"` → 12). No digits, overflow, or 0 give page 1.
pub fn parse_page(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let parsed = digits[..end].parse::<i64>().ok().map(|n| if negative { -n } else { n });

    match parsed {
        Some(0) | None => 1,
        Some(n) => n,
    }
}
