//! Utility functions and helpers.

use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Resolve a URL string against a base URL string.
///
/// Falls back to the href unchanged when the base does not parse.
pub fn resolve(base_url: &str, href: &str) -> String {
    match Url::parse(base_url) {
        Ok(base) => resolve_url(&base, href),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://www.men.gov.ma/").unwrap();
        assert_eq!(
            resolve_url(&base, "docs/avis.pdf"),
            "https://www.men.gov.ma/docs/avis.pdf"
        );
        assert_eq!(
            resolve_url(&base, "/docs/avis.pdf"),
            "https://www.men.gov.ma/docs/avis.pdf"
        );
        assert_eq!(
            resolve_url(&base, "https://other.example/x.pdf"),
            "https://other.example/x.pdf"
        );
    }

    #[test]
    fn test_resolve_from_strings() {
        assert_eq!(
            resolve("https://www.men.gov.ma/", "docs/avis.pdf"),
            "https://www.men.gov.ma/docs/avis.pdf"
        );
        assert_eq!(resolve("not a base", "docs/avis.pdf"), "docs/avis.pdf");
    }
}
