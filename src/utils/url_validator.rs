//! Syntactic sanity check for long URLs.
//!
//! Not an RFC 3986 validator: it accepts an optional `http(s)://` scheme,
//! dot-separated host labels ending in a 2-6 letter top-level label, and any
//! path. IP-literal hosts, ports and IDN hosts are rejected.

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9\-_]+\.)+[a-zA-Z]{2,6}(/.*)*/?$")
        .expect("URL pattern is a valid regex")
});

/// Returns true if `url` looks like a web URL.
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/"));
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("https://sub.domain-name.example.co.uk/path/to/page"));
        assert!(is_valid_url("https://my_site.example.org/a?b=c#frag"));
    }

    #[test]
    fn test_rejects_malformed_strings() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("localhost"));
        assert!(!is_valid_url("https://example"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("javascript:alert(1)"));
    }

    #[test]
    fn test_top_level_label_length() {
        assert!(!is_valid_url("https://example.c"));
        assert!(is_valid_url("https://example.museum"));
        assert!(!is_valid_url("https://example.toolongtld"));
    }

    #[test]
    fn test_rejects_ports_and_ip_literals() {
        assert!(!is_valid_url("https://example.com:8080/path"));
        assert!(!is_valid_url("http://127.0.0.1/"));
    }
}
