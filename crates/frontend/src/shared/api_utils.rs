//! API utilities for the catalog's upstream requests
//!
//! The catalog has no backend of its own; every request goes to the public
//! dummyjson.com demo API.

/// Base URL of the upstream demo API.
pub const API_BASE: &str = "https://dummyjson.com";

/// Get the base URL for API requests
pub fn api_base() -> String {
    API_BASE.to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/products/categories");
/// assert_eq!(url, "https://dummyjson.com/products/categories");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
