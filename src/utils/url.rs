//! URL helpers for field data queries and display.

use url::Url;

/// Origin queried when the input cannot be parsed.
pub const FALLBACK_ORIGIN: &str = "https://example.com";

/// Prefix `https://` unless the input already names an http(s) scheme.
#[must_use]
pub fn with_https_scheme(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Normalize user input into the `https` origin field data is keyed by.
///
/// Adds a scheme when missing, upgrades `http` to `https` and drops path,
/// query and fragment. Unparseable input maps to [`FALLBACK_ORIGIN`].
#[must_use]
pub fn normalize_origin(input: &str) -> String {
    let candidate = with_https_scheme(input);

    let Ok(mut parsed) = Url::parse(&candidate) else {
        tracing::debug!(input, "unparseable URL, using fallback origin");
        return FALLBACK_ORIGIN.to_string();
    };

    if parsed.scheme() == "http" && parsed.set_scheme("https").is_err() {
        return FALLBACK_ORIGIN.to_string();
    }

    let origin = parsed.origin();
    if origin.is_tuple() {
        origin.ascii_serialization()
    } else {
        FALLBACK_ORIGIN.to_string()
    }
}

/// Whether the input parses as an http(s) URL, adding `https://` if the
/// input has no `http` prefix.
#[must_use]
pub fn is_valid_url(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }
    let candidate = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    Url::parse(&candidate)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}

/// Strip the scheme and one trailing slash for compact display.
#[must_use]
pub fn display_url(input: &str) -> &str {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.strip_suffix('/').unwrap_or(without_scheme)
}

/// Host name of a URL, or the input unchanged when it cannot be parsed.
#[must_use]
pub fn extract_domain(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let candidate = if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{input}")
    };
    Url::parse(&candidate)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_scheme_and_drops_path() {
        assert_eq!(normalize_origin("example.com"), "https://example.com");
        assert_eq!(
            normalize_origin("  www.example.com/some/page?q=1#top  "),
            "https://www.example.com"
        );
    }

    #[test]
    fn test_normalize_upgrades_http() {
        assert_eq!(normalize_origin("http://example.com/x"), "https://example.com");
    }

    #[test]
    fn test_normalize_keeps_non_default_port() {
        assert_eq!(
            normalize_origin("https://example.com:8443/"),
            "https://example.com:8443"
        );
    }

    #[test]
    fn test_normalize_invalid_falls_back() {
        assert_eq!(normalize_origin(""), FALLBACK_ORIGIN);
        assert_eq!(normalize_origin("   "), FALLBACK_ORIGIN);
        assert_eq!(normalize_origin("exa mple.com"), FALLBACK_ORIGIN);
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("http://example.com/path"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("exa mple.com"));
    }

    #[test]
    fn test_display_url() {
        assert_eq!(display_url("https://example.com/"), "example.com");
        assert_eq!(display_url("http://example.com/a"), "example.com/a");
        assert_eq!(display_url("example.com"), "example.com");
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("https://www.example.com/a"), "www.example.com");
        assert_eq!(extract_domain("example.com/a"), "example.com");
        assert_eq!(extract_domain(""), "");
    }
}
