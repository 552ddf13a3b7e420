use listing_core::includes_ignoring_case;

use crate::contract::User;

/// True when `query` occurs (ignoring case) in the user's first name, last
/// name or email. The empty query matches everyone.
pub fn matches_query(user: &User, query: &str) -> bool {
    includes_ignoring_case(user.first_name(), query)
        || includes_ignoring_case(user.last_name(), query)
        || includes_ignoring_case(user.email(), query)
}

/// Users matching `query`, in input order.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    users.iter().filter(|u| matches_query(u, query)).collect()
}
