//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Uses the configured `api.base_url` when set; otherwise constructs it from
/// the current window location and the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/customers/7");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Map a non-success HTTP status to an error message
pub fn status_error(action: &str, status: u16) -> String {
    match status {
        401 | 403 => format!("{} failed: not authorized ({})", action, status),
        404 => format!("{} failed: not found", action),
        409 => format!("{} failed: the record is referenced elsewhere ({})", action, status),
        _ => format!("{} failed: {}", action, status),
    }
}
