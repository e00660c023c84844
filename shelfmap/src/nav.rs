//! Detail-view addressing for marker activation and result cards.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::DETAIL_ROUTE;

/// URL of a book's detail view, with the id percent-encoded into the query.
#[must_use]
pub fn detail_href(book_id: &str) -> String {
    format!("{DETAIL_ROUTE}?id={}", urlencoding::encode(book_id))
}
