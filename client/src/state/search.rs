//! Search form and result-list state for the catalog landing page.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::api::{ApiError, SearchQuery};
use crate::net::types::{BookRecord, SearchResponse};

/// Shown in place of the result list when a search request fails.
pub const SEARCH_FAILED_MESSAGE: &str = "No se pudo cargar el contenido.";

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Raw text of the search box.
    pub query: String,
    /// Selected category; empty means all.
    pub category: String,
    pub categories: Vec<String>,
    pub results: Vec<BookRecord>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl SearchState {
    /// Request parameters for the current form values.
    pub fn to_query(&self, limit: u32) -> SearchQuery {
        SearchQuery { q: self.query.trim().to_owned(), categoria: self.category.clone(), limit }
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Replace results with a successful response.
    pub fn apply_response(&mut self, response: SearchResponse) {
        self.total = response.total;
        self.results = response.results;
        self.error = None;
        self.loading = false;
    }

    /// Replace results with the failure message. The previous count stays.
    pub fn apply_failure(&mut self, err: &ApiError) {
        log::warn!("search failed: {err}");
        self.results.clear();
        self.error = Some(SEARCH_FAILED_MESSAGE.to_owned());
        self.loading = false;
    }
}

/// `"1 resultado"`, `"N resultados"`.
pub fn result_count_label(total: u64) -> String {
    let plural = if total == 1 { "" } else { "s" };
    format!("{total} resultado{plural}")
}
