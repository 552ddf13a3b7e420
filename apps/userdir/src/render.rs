//! Plain-text and JSON views of the current page.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;
use user_directory::domain::columns::{user_columns, ColumnKind, ColumnModel};
use user_directory::model::User;
use user_directory::{RouteQuery, ViewState};

fn table_columns() -> Vec<&'static ColumnModel> {
    user_columns()
        .iter()
        .filter(|c| c.kind != ColumnKind::Image)
        .collect()
}

fn write_rows(out: &mut String, header: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(out, "{}", line(header));
    let _ = writeln!(
        out,
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in rows {
        let _ = writeln!(out, "{}", line(row));
    }
}

/// Table of the visible page followed by a paging footer.
pub fn users_table(state: &ViewState) -> String {
    let columns = table_columns();
    let page = state.visible();

    let header: Vec<String> = columns.iter().map(|c| c.name.to_string()).collect();
    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|user| columns.iter().map(|c| c.cell(user)).collect())
        .collect();

    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("No users to show.\n");
    } else {
        write_rows(&mut out, &header, &rows);
    }

    let info = &page.page_info;
    let _ = writeln!(
        out,
        "\nPage {} of {} ({} matching users)",
        info.page, info.total_pages, info.total_items
    );
    if info.has_next() {
        let next = RouteQuery::from_state(state).with_page(info.page + 1);
        let _ = writeln!(out, "Next: --query '{}'", next.to_query_string());
    }
    out
}

#[derive(Serialize)]
struct PageView<'a> {
    query: String,
    page: i64,
    total_pages: usize,
    total_items: usize,
    users: Vec<&'a User>,
}

pub fn users_json(state: &ViewState) -> Result<String> {
    let page = state.visible();
    let view = PageView {
        query: RouteQuery::from_state(state).to_query_string(),
        page: page.page_info.page,
        total_pages: page.page_info.total_pages,
        total_items: page.page_info.total_items,
        users: page.items,
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

pub fn columns_table() -> String {
    let header = ["Name", "Key", "Kind", "Sortable"].map(String::from);
    let rows: Vec<Vec<String>> = user_columns()
        .iter()
        .map(|c| {
            vec![
                c.name.to_string(),
                c.key.to_string(),
                format!("{:?}", c.kind).to_lowercase(),
                if c.is_sortable { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    let mut out = String::new();
    write_rows(&mut out, &header, &rows);
    out
}
