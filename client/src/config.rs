//! Client configuration resolved once at startup.
//!
//! The only runtime input is the page origin; everything else has a default
//! that can be overridden when the WASM bundle is built:
//!
//! - `CATALOG_API_BASE`: API root (default `<origin>/api`)
//! - `CATALOG_SEARCH_LIMIT`: results per search (default 24)
//! - `CATALOG_DEBOUNCE_MS`: search-as-you-type delay (default 350)
//! - `CATALOG_LOG_LEVEL`: console log level (default `info`)
//!
//! Invalid overrides are ignored rather than rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SEARCH_LIMIT: u32 = 24;
pub const DEFAULT_DEBOUNCE_MS: u32 = 350;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `https://host/api`.
    pub api_base: String,
    pub search_limit: u32,
    pub debounce_ms: u32,
    pub log_level: log::Level,
}

impl ClientConfig {
    /// Resolve configuration for the current page.
    pub fn current() -> Self {
        Self::from_build_env(&page_origin())
    }

    /// Resolve configuration for `origin`, applying build-time overrides.
    pub fn from_build_env(origin: &str) -> Self {
        Self::from_parts(
            origin,
            option_env!("CATALOG_API_BASE"),
            option_env!("CATALOG_SEARCH_LIMIT"),
            option_env!("CATALOG_DEBOUNCE_MS"),
            option_env!("CATALOG_LOG_LEVEL"),
        )
    }

    fn from_parts(
        origin: &str,
        api_base: Option<&str>,
        search_limit: Option<&str>,
        debounce_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        Self {
            api_base: parse_api_base(api_base, origin),
            search_limit: parse_positive(search_limit, DEFAULT_SEARCH_LIMIT),
            debounce_ms: parse_positive(debounce_ms, DEFAULT_DEBOUNCE_MS),
            log_level: parse_log_level(log_level),
        }
    }
}

fn parse_api_base(raw: Option<&str>, origin: &str) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_owned(),
        None => format!("{}/api", origin.trim_end_matches('/')),
    }
}

fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// `window.location.origin`, or an empty string outside the browser.
fn page_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
