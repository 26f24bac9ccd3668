//! Shape checks for emails, URLs and dotted-quad addresses.
//!
//! These are syntactic filters, not parsers: `is_valid_ipv4` accepts
//! `999.1.1.1`, and `is_valid_email` accepts anything of the form
//! `local@domain.tld` without whitespace.
//!
//! Digits are ASCII only (`[0-9]`, not the Unicode `\d`); whitespace is
//! Unicode whitespace.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(http|https)://[^\s]+$").expect("url pattern is a valid regex"));

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("ipv4 pattern is a valid regex")
});

/// Returns true for `local@domain.tld` with no whitespace and a single `@`.
///
/// # Examples
/// ```
/// use u_toolkit::validate::is_valid_email;
/// assert!(is_valid_email("ada@example.com"));
/// assert!(!is_valid_email("ada@example"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Returns true for `http://` or `https://` followed by non-whitespace.
pub fn is_valid_url(url: &str) -> bool {
    URL.is_match(url)
}

/// Returns true for four dot-separated groups of one to three digits.
///
/// Octet values are not range-checked.
pub fn is_valid_ipv4(ip: &str) -> bool {
    IPV4.is_match(ip)
}
