use std::sync::Arc;

use listing_core::{paginate, sort_by_path, total_pages, FieldPath, Page, SortDir, SortKey};
use parking_lot::Mutex;
use serde::{Serialize, Serializer};

use crate::contract::User;
use crate::domain::filter::matches_query;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Partial update of the view filters; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub query: Option<String>,
    pub page: Option<i64>,
    pub sort_key: Option<String>,
    pub sort_order: Option<SortDir>,
}

/// Raw users plus view filters, and the filter → sort → paginate chain
/// derived from them.
///
/// Mutators assign without validation: a page of `-5` is stored as given and
/// simply renders as an empty page. The filtered-and-sorted ordering is
/// cached until a mutator that affects it runs.
#[derive(Debug)]
pub struct ViewState {
    users: Vec<User>,
    search_query: String,
    current_page: i64,
    items_per_page: usize,
    sort_key: FieldPath,
    sort_order: SortDir,
    ordering: Mutex<Option<Arc<[usize]>>>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Serializes as the wrapped user so the sort stage can resolve paths on it
/// while the index travels along.
struct Indexed<'a> {
    index: usize,
    user: &'a User,
}

impl Serialize for Indexed<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.user.serialize(serializer)
    }
}

impl ViewState {
    /// `items_per_page` of 0 is raised to 1.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            users: Vec::new(),
            search_query: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
            sort_key: FieldPath::empty(),
            sort_order: SortDir::Asc,
            ordering: Mutex::new(None),
        }
    }

    // --- accessors ---

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn sort_key(&self) -> &FieldPath {
        &self.sort_key
    }

    pub fn sort_order(&self) -> SortDir {
        self.sort_order
    }

    // --- mutators ---

    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.invalidate();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.invalidate();
    }

    pub fn set_current_page(&mut self, page: i64) {
        self.current_page = page;
    }

    pub fn set_sort_key(&mut self, key: impl Into<FieldPath>) {
        self.sort_key = key.into();
        self.invalidate();
    }

    pub fn set_sort_order(&mut self, order: SortDir) {
        self.sort_order = order;
        self.invalidate();
    }

    /// Assign only the fields present in `update`.
    pub fn apply_filters(&mut self, update: FilterUpdate) {
        if let Some(query) = update.query {
            self.set_search_query(query);
        }
        if let Some(page) = update.page {
            self.set_current_page(page);
        }
        if let Some(key) = update.sort_key {
            self.set_sort_key(key);
        }
        if let Some(order) = update.sort_order {
            self.set_sort_order(order);
        }
    }

    fn invalidate(&mut self) {
        *self.ordering.get_mut() = None;
    }

    // --- derived ---

    /// Users matching the search query, in fetch order.
    pub fn filtered_users(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| matches_query(u, &self.search_query))
            .collect()
    }

    /// Filtered users in sort order.
    pub fn sorted_users(&self) -> Vec<&User> {
        self.ordering().iter().map(|&i| &self.users[i]).collect()
    }

    /// The current page of sorted users.
    pub fn paginated_users(&self) -> Vec<&User> {
        self.visible().items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.ordering().len(), self.items_per_page)
    }

    /// The current page together with its paging metadata.
    pub fn visible(&self) -> Page<&User> {
        paginate(self.sorted_users(), self.current_page, self.items_per_page)
    }

    /// Indices into `users` after filtering and sorting; memoized.
    pub(crate) fn ordering(&self) -> Arc<[usize]> {
        let mut cached = self.ordering.lock();
        if let Some(ordering) = cached.as_ref() {
            return Arc::clone(ordering);
        }

        let filtered: Vec<Indexed<'_>> = self
            .users
            .iter()
            .enumerate()
            .filter(|(_, u)| matches_query(u, &self.search_query))
            .map(|(index, user)| Indexed { index, user })
            .collect();

        let key = SortKey {
            field: self.sort_key.clone(),
            dir: self.sort_order,
        };
        let ordering: Arc<[usize]> = sort_by_path(filtered, &key)
            .into_iter()
            .map(|entry| entry.index)
            .collect();

        *cached = Some(Arc::clone(&ordering));
        ordering
    }
}
