//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Name of the `<meta>` tag that overrides the API base URL.
pub const API_BASE_META: &str = "rag-api-base";

/// Get the base URL for API requests
///
/// The RAG server normally serves this page itself, so the default is the
/// empty string and requests go to the page origin (`/status`, `/chat`).
/// A deployment that hosts the API elsewhere sets
/// `<meta name="rag-api-base" content="https://host:5000">`.
///
/// # Returns
/// - Base URL without trailing slash, like "https://example.com:5000"
/// - Empty string when no override is present or window is not available
pub fn api_base() -> String {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return String::new(),
    };
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    match document.query_selector(&selector) {
        Ok(Some(meta)) => normalize_base(&meta.get_attribute("content").unwrap_or_default()),
        _ => String::new(),
    }
}

/// Strip whitespace and trailing slashes from a configured base URL
pub fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Build a full API URL from a base and a path
///
/// # Arguments
/// * `base` - Result of [`api_base`], possibly empty
/// * `path` - The endpoint path (should start with "/")
///
/// # Example
/// ```rust
/// let url = rag_chat_frontend::shared::api_utils::api_url("", "/status");
/// assert_eq!(url, "/status");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}
