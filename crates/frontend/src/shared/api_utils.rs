//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Prefix of every backend resource path.
pub const API_PREFIX: &str = "/api/v1";

/// Get the base URL for API requests
///
/// `CONSOLE_API_BASE` set at build time wins; otherwise the console is
/// served by the backend itself and the window origin is used.
///
/// # Returns
/// - API base URL like "https://erp.example.com"
/// - Empty string if window is not available (relative URLs)
pub fn api_base() -> String {
    if let Some(base) = option_env!("CONSOLE_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

fn join_api_path(base: &str, path: &str) -> String {
    format!("{}{}/{}", base, API_PREFIX, path.trim_start_matches('/'))
}

/// Build a full API URL from a resource path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("client-type/5/field");
/// ```
pub fn api_url(path: &str) -> String {
    join_api_path(&api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_prefix_and_path() {
        assert_eq!(
            join_api_path("https://erp.local", "/client?page=0"),
            "https://erp.local/api/v1/client?page=0"
        );
        assert_eq!(join_api_path("", "source"), "/api/v1/source");
    }
}
