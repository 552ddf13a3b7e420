//! Behavior of the filter → sort → paginate chain as seen through ViewState.

mod common;

use common::{first_names, make_user, numbered_users, with_age, with_country};
use listing_core::SortDir;
use user_directory::domain::filter::matches_query;
use user_directory::model::UsersEnvelope;
use user_directory::{FilterUpdate, ViewState};

#[test]
fn defaults() {
    let state = ViewState::default();
    assert!(state.users().is_empty());
    assert_eq!(state.search_query(), "");
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.items_per_page(), 20);
    assert!(state.sort_key().is_empty());
    assert_eq!(state.sort_order(), SortDir::Asc);
    assert_eq!(state.total_pages(), 0);
    assert!(state.paginated_users().is_empty());
}

#[test]
fn forty_five_users_make_three_pages() {
    let mut state = ViewState::default();
    state.set_users(numbered_users(45));

    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.paginated_users().len(), 20);

    state.set_current_page(3);
    let last = state.paginated_users();
    assert_eq!(last.len(), 5);
    assert_eq!(last[0].first_name(), "user40");
    assert_eq!(last[4].first_name(), "user44");

    state.set_current_page(4);
    assert!(state.paginated_users().is_empty());
}

#[test]
fn mixed_case_search_matches_last_name_and_email() {
    let mut state = ViewState::default();
    state.set_users(vec![
        make_user("John", "Smith", "john@example.com"),
        make_user("Lea", "Roux", "SMITHERS@example.com"),
        make_user("Ana", "Silva", "ana@example.com"),
    ]);

    state.set_search_query("SmItH");

    assert_eq!(first_names(state.filtered_users()), vec!["John", "Lea"]);
    assert_eq!(state.total_pages(), 1);
}

#[test]
fn filter_membership_matches_definition() {
    let users = vec![
        make_user("Zoë", "Ng", "zoe@example.org"),
        make_user("Bob", "Ngata", "b@example.com"),
        make_user("Ng", "Lee", "lee@ng.example"),
        make_user("Amy", "Ho", "amy@example.com"),
    ];

    for query in ["", "ng", "NG", "example", "zoë", "x", "@", "amy@"] {
        let mut state = ViewState::default();
        state.set_users(users.clone());
        state.set_search_query(query);

        let kept = state.filtered_users();
        for user in &users {
            let expected = query.is_empty()
                || [user.first_name(), user.last_name(), user.email()]
                    .iter()
                    .any(|f| f.to_lowercase().contains(&query.to_lowercase()));
            assert_eq!(kept.contains(&user), expected, "query={query:?} user={user:?}");
            assert_eq!(matches_query(user, query), expected);
        }
    }
}

#[test]
fn age_descending_puts_missing_dob_first() {
    let mut state = ViewState::default();
    state.set_users(vec![
        with_age(make_user("Mid", "A", "a@x"), 40),
        make_user("NoDob", "B", "b@x"),
        with_age(make_user("Old", "C", "c@x"), 71),
        with_age(make_user("Young", "D", "d@x"), 19),
        make_user("AlsoNoDob", "E", "e@x"),
    ]);

    state.set_sort_key("dob.age");
    state.set_sort_order(SortDir::Desc);
    assert_eq!(
        first_names(state.sorted_users()),
        vec!["NoDob", "AlsoNoDob", "Old", "Mid", "Young"]
    );

    state.set_sort_order(SortDir::Asc);
    assert_eq!(
        first_names(state.sorted_users()),
        vec!["Young", "Mid", "Old", "NoDob", "AlsoNoDob"]
    );
}

#[test]
fn ties_keep_fetch_order() {
    let mut state = ViewState::default();
    state.set_users(vec![
        with_country(make_user("a", "", "a@x"), "NZ"),
        with_country(make_user("b", "", "b@x"), "AU"),
        with_country(make_user("c", "", "c@x"), "NZ"),
        with_country(make_user("d", "", "d@x"), "AU"),
    ]);

    state.set_sort_key("location.country");
    let once = first_names(state.sorted_users());
    assert_eq!(once, vec!["b", "d", "a", "c"]);

    // Re-applying the same sort is a no-op
    state.set_sort_key("location.country");
    assert_eq!(first_names(state.sorted_users()), once);
}

#[test]
fn empty_sort_key_keeps_fetch_order() {
    let mut state = ViewState::default();
    state.set_users(numbered_users(5));
    state.set_sort_order(SortDir::Desc);
    assert_eq!(
        first_names(state.sorted_users()),
        vec!["user0", "user1", "user2", "user3", "user4"]
    );
}

#[test]
fn filter_runs_before_sort_and_paging() {
    let mut state = ViewState::new(2);
    state.set_users(vec![
        with_age(make_user("Kim", "Smith", "k@x"), 50),
        with_age(make_user("Lou", "Other", "l@x"), 10),
        with_age(make_user("Max", "Smithson", "m@x"), 30),
        with_age(make_user("Ned", "Smyth", "n@x"), 20),
        with_age(make_user("Oz", "Blacksmith", "o@x"), 40),
    ]);
    state.apply_filters(FilterUpdate {
        query: Some("smith".into()),
        page: Some(2),
        sort_key: Some("dob.age".into()),
        sort_order: Some(SortDir::Asc),
    });

    assert_eq!(state.total_pages(), 2);
    assert_eq!(first_names(state.paginated_users()), vec!["Kim"]);

    let page = state.visible();
    assert_eq!(page.page_info.total_items, 3);
    assert_eq!(page.page_info.page, 2);
    assert!(page.page_info.has_prev());
    assert!(!page.page_info.has_next());
}

#[test]
fn pages_reconstruct_sorted_collection() {
    let mut state = ViewState::default();
    state.set_users(
        (0..57)
            .map(|i| with_age(numbered_users(57)[i].clone(), (i as u32 * 13) % 23))
            .collect(),
    );
    state.set_sort_key("dob.age");
    state.set_sort_order(SortDir::Desc);

    let sorted = first_names(state.sorted_users());
    let mut rebuilt = Vec::new();
    for page in 1..=state.total_pages() as i64 {
        state.set_current_page(page);
        rebuilt.extend(first_names(state.paginated_users()));
    }
    assert_eq!(rebuilt, sorted);
}

#[test]
fn apply_filters_only_touches_given_fields() {
    let mut state = ViewState::default();
    state.set_search_query("keep");
    state.set_sort_key("email");
    state.set_sort_order(SortDir::Desc);

    state.apply_filters(FilterUpdate {
        page: Some(7),
        ..Default::default()
    });

    assert_eq!(state.search_query(), "keep");
    assert_eq!(state.current_page(), 7);
    assert_eq!(state.sort_key().as_str(), "email");
    assert_eq!(state.sort_order(), SortDir::Desc);
}

#[test]
fn invalid_page_is_stored_verbatim_and_renders_empty() {
    let mut state = ViewState::default();
    state.set_users(numbered_users(10));

    state.set_current_page(-5);
    assert_eq!(state.current_page(), -5);
    assert!(state.paginated_users().is_empty());

    state.set_current_page(0);
    assert!(state.paginated_users().is_empty());
    assert_eq!(state.total_pages(), 1);
}

#[test]
fn set_users_replaces_wholesale() {
    let mut state = ViewState::default();
    state.set_users(numbered_users(30));
    state.set_users(numbered_users(3));
    assert_eq!(state.users().len(), 3);
    assert_eq!(state.total_pages(), 1);
}

fn users_from(document: &str) -> Vec<user_directory::model::User> {
    serde_json::from_str::<UsersEnvelope>(document).unwrap().results
}

#[test]
fn missing_email_sorts_last_ascending_and_first_descending() {
    let mut state = ViewState::default();
    state.set_users(users_from(
        r#"{ "results": [
            { "name": { "first": "NoEmail" } },
            { "name": { "first": "A" }, "email": "a@example.com" },
            { "name": { "first": "Null" }, "email": null },
            { "name": { "first": "B" }, "email": "b@example.com" }
        ] }"#,
    ));
    state.set_sort_key("email");

    assert_eq!(
        first_names(state.sorted_users()),
        vec!["A", "B", "NoEmail", "Null"]
    );

    state.set_sort_order(SortDir::Desc);
    assert_eq!(
        first_names(state.sorted_users()),
        vec!["NoEmail", "Null", "B", "A"]
    );
}

#[test]
fn dob_without_age_sorts_with_the_missing() {
    let mut state = ViewState::default();
    state.set_users(users_from(
        r#"{ "results": [
            { "name": { "first": "NoAge" }, "dob": { "date": "1990-01-01" } },
            { "name": { "first": "Young" }, "dob": { "age": 20 } },
            { "name": { "first": "Old" }, "dob": { "age": 70 } }
        ] }"#,
    ));
    state.set_sort_key("dob.age");

    assert_eq!(
        first_names(state.sorted_users()),
        vec!["Young", "Old", "NoAge"]
    );
}

#[test]
fn untyped_fields_are_sortable() {
    let mut state = ViewState::default();
    state.set_users(users_from(
        r#"{ "results": [
            { "name": { "first": "Fr" }, "nat": "FR", "login": { "username": "zed" } },
            { "name": { "first": "None" } },
            { "name": { "first": "Au" }, "nat": "AU", "login": { "username": "amy" } }
        ] }"#,
    ));

    state.set_sort_key("nat");
    assert_eq!(first_names(state.sorted_users()), vec!["Au", "Fr", "None"]);

    state.set_sort_key("login.username");
    assert_eq!(first_names(state.sorted_users()), vec!["Au", "Fr", "None"]);
}
