//! API utilities for frontend-backend communication
//!
//! Helpers for joining the configured base URL with resource paths.

/// Build a full API URL from the configured base and a resource path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("https://h/api/", "/cafes/all"), "https://h/api/cafes/all");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Percent-encode an opaque id for use as a path segment or query value
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_double_slashes() {
        assert_eq!(api_url("https://h/api", "cafes/all"), "https://h/api/cafes/all");
        assert_eq!(api_url("https://h/api/", "/cafes/all"), "https://h/api/cafes/all");
        assert_eq!(api_url("/api", "/employees?cafeId=7"), "/api/employees?cafeId=7");
    }

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("3fa85f64-5717"), "3fa85f64-5717");
    }
}
