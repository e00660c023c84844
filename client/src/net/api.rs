//! REST API helpers for communicating with the catalog backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning [`ApiError::Unavailable`], since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result`/empty outputs instead of panics. Search and detail
//! failures surface as a short message; category and map failures degrade
//! silently because both features are secondary to search.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use shelfmap::{MapError, MapMetadata, MapSource};

use super::types::{BookRecord, SearchResponse};

/// Failure of a catalog REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl From<ApiError> for MapError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status(status) => MapError::Status(status),
            ApiError::Decode(msg) => MapError::Decode(msg),
            ApiError::Transport(msg) => MapError::Transport(msg),
            ApiError::Unavailable => MapError::Transport(ApiError::Unavailable.to_string()),
        }
    }
}

/// Parameters of a catalog search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub categoria: String,
    pub limit: u32,
}

pub fn map_endpoint(api_base: &str) -> String {
    format!("{api_base}/map")
}

pub fn categories_endpoint(api_base: &str) -> String {
    format!("{api_base}/categories")
}

/// `/books?q=&categoria=&limit=`; blank `q`/`categoria` are omitted.
pub fn books_endpoint(api_base: &str, query: &SearchQuery) -> String {
    let mut params = Vec::with_capacity(3);
    let q = query.q.trim();
    if !q.is_empty() {
        params.push(format!("q={}", urlencoding::encode(q)));
    }
    if !query.categoria.is_empty() {
        params.push(format!("categoria={}", urlencoding::encode(&query.categoria)));
    }
    params.push(format!("limit={}", query.limit));
    format!("{api_base}/books?{}", params.join("&"))
}

pub fn book_endpoint(api_base: &str, id: &str) -> String {
    format!("{api_base}/books/{}", urlencoding::encode(id))
}

/// Fetch category names from `/api/categories`. Empty on any failure.
pub async fn fetch_categories(api_base: &str) -> Vec<String> {
    match get_json::<Vec<String>>(&categories_endpoint(api_base)).await {
        Ok(categories) => categories,
        Err(e) => {
            log::warn!("categories unavailable: {e}");
            Vec::new()
        }
    }
}

/// Run a catalog search via `/api/books`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a search response.
pub async fn search_books(api_base: &str, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
    get_json(&books_endpoint(api_base, query)).await
}

/// Fetch one record from `/api/books/<id>`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 404 for unknown ids, and the usual
/// transport/decode errors otherwise.
pub async fn fetch_book(api_base: &str, id: &str) -> Result<BookRecord, ApiError> {
    get_json(&book_endpoint(api_base, id)).await
}

/// Map metadata over HTTP (`GET /api/map`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpMapSource {
    api_base: String,
}

impl HttpMapSource {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

impl MapSource for HttpMapSource {
    async fn fetch_map(&self) -> Result<MapMetadata, MapError> {
        let body = get_text(&map_endpoint(&self.api_base)).await?;
        MapMetadata::from_json(&body)
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let body = get_text(url).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_text(url: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}
