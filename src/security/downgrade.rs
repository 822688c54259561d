//! HTTPS to HTTP downgrade detection.

const HTTPS_PREFIX: &str = "https://";
const HTTP_PREFIX: &str = "http://";

/// Returns true when navigating from `original_url` to `final_url` dropped
/// from an encrypted to an unencrypted connection.
///
/// This is a case-insensitive prefix comparison, not a scheme parse:
/// `original_url` must start with `https://` and `final_url` with `http://`.
/// Empty arguments never count as a downgrade.
pub fn is_https_to_http_downgrade(original_url: &str, final_url: &str) -> bool {
    if original_url.is_empty() || final_url.is_empty() {
        return false;
    }
    has_prefix_ignore_case(original_url, HTTPS_PREFIX)
        && has_prefix_ignore_case(final_url, HTTP_PREFIX)
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_to_http_is_downgrade() {
        assert!(is_https_to_http_downgrade(
            "https://example.com",
            "http://example.com/"
        ));
        assert!(is_https_to_http_downgrade(
            "https://bank.example/login",
            "http://phish.example/collect?x=1"
        ));
    }

    #[test]
    fn test_downgrade_ignores_case() {
        assert!(is_https_to_http_downgrade("HTTPS://EXAMPLE.COM", "Http://example.com"));
        assert!(is_https_to_http_downgrade("hTtPs://a", "HTTP://b"));
    }

    #[test]
    fn test_other_scheme_pairs_are_not_downgrades() {
        let pairs = [
            ("http://example.com", "http://example.com"),
            ("https://example.com", "https://example.com"),
            ("http://example.com", "https://example.com"),
            ("https://example.com", "ftp://example.com"),
        ];
        for (original, final_url) in pairs {
            assert!(
                !is_https_to_http_downgrade(original, final_url),
                "{original} -> {final_url}"
            );
        }
    }

    #[test]
    fn test_empty_arguments_are_not_downgrades() {
        assert!(!is_https_to_http_downgrade("", "http://example.com"));
        assert!(!is_https_to_http_downgrade("https://example.com", ""));
        assert!(!is_https_to_http_downgrade("", ""));
    }

    #[test]
    fn test_only_exact_prefixes_match() {
        // Not a scheme parse: look-alike schemes and short strings don't match
        assert!(!is_https_to_http_downgrade("httpsx://example.com", "http://example.com"));
        assert!(!is_https_to_http_downgrade("https://example.com", "httpx://example.com"));
        assert!(!is_https_to_http_downgrade("https:/", "http:/"));
        assert!(!is_https_to_http_downgrade("https://é", "http:é"));
    }

    #[test]
    fn test_is_deterministic() {
        for _ in 0..3 {
            assert!(is_https_to_http_downgrade("https://a.example", "http://b.example"));
            assert!(!is_https_to_http_downgrade("http://a.example", "http://b.example"));
        }
    }
}
