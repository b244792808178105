//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Compile-time override for the API origin, e.g. `http://127.0.0.1:3000`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("SETTINGS_API_BASE");

/// Get the base URL for API requests
///
/// `SETTINGS_API_BASE` set at build time wins. Otherwise the settings API is
/// served from the same origin as the page.
///
/// # Returns
/// - API base URL like "https://example.com" or "http://localhost:8080"
/// - Empty string if window is not available (requests become relative)
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/settings");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
