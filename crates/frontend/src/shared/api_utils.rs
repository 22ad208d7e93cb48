//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the REST backend listens on when no explicit base is configured.
pub const DEFAULT_API_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// A compile-time `DASHBOARD_API_BASE` wins. Otherwise the base is built
/// from the current window location, e.g. `"http://localhost:8000/api"`.
/// Empty string if window is not available.
pub fn api_base() -> String {
    if let Some(base) = option_env!("DASHBOARD_API_BASE") {
        return base.trim_end_matches('/').to_string();
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
    base_from_location(&protocol, &hostname)
}

pub fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}/api", protocol, hostname, DEFAULT_API_PORT)
}

/// Collection endpoint, always with the trailing slash the API expects.
///
/// ```text
/// collection_url("http://h:8000/api", "products") == "http://h:8000/api/products/"
/// ```
pub fn collection_url(base: &str, resource: &str) -> String {
    format!("{}/{}/", base.trim_end_matches('/'), resource.trim_matches('/'))
}

/// Single-record endpoint used by PUT and DELETE.
pub fn item_url(base: &str, resource: &str, id: i64) -> String {
    format!("{}{}/", collection_url(base, resource), id)
}

/// Append url-encoded query parameters.
pub fn with_query(url: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, sep, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        assert_eq!(
            base_from_location("https:", "shop.example.com"),
            "https://shop.example.com:8000/api"
        );
    }

    #[test]
    fn test_collection_and_item_urls() {
        assert_eq!(
            collection_url("http://h:8000/api/", "inventory"),
            "http://h:8000/api/inventory/"
        );
        assert_eq!(
            collection_url("http://h:8000/api", "/orders-by-month/"),
            "http://h:8000/api/orders-by-month/"
        );
        assert_eq!(item_url("http://h/api", "products", 42), "http://h/api/products/42/");
    }

    #[test]
    fn test_with_query_encodes_values() {
        let params = vec![
            ("search".to_string(), "red shoes".to_string()),
            ("page".to_string(), "2".to_string()),
        ];
        assert_eq!(
            with_query("http://h/api/products/", &params),
            "http://h/api/products/?search=red%20shoes&page=2"
        );
        assert_eq!(with_query("http://h/x/?a=1", &params[1..]), "http://h/x/?a=1&page=2");
        assert_eq!(with_query("http://h/x/", &[]), "http://h/x/");
    }
}
