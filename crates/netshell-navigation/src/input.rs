//! Input resolution for the address bar

use netshell_storage::Settings;

/// Literal placeholder substituted with the user's query in a search template.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Navigate to a URL the user typed directly
    Navigate(String),
    /// Perform a search through the configured engine
    Search(String),
}

impl InputResolution {
    /// The final URL to hand to the content surface, either way.
    pub fn into_url(self) -> String {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }
}

/// Resolve free-text address bar input into a navigable URL.
///
/// The URL check is a deliberately loose "looks like a URL" heuristic: a
/// case-sensitive `http` prefix on the literal text, covering both `http://`
/// and `https://`, with no further validation. Everything else is substituted
/// verbatim (no escaping) for `{query}` in the search template. Empty input
/// still produces a syntactically valid search URL; downstream navigation
/// owns unreachable results.
pub fn resolve(input: &str, settings: &Settings) -> InputResolution {
    if input.starts_with("http") {
        return InputResolution::Navigate(input.to_string());
    }

    let url = settings.search_engine.replace(QUERY_PLACEHOLDER, input);
    tracing::debug!(input = %input, url = %url, "Resolved input to search");

    InputResolution::Search(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            homepage: "https://home.example".to_string(),
            search_engine: "https://s.example/?q={query}".to_string(),
        }
    }

    #[test]
    fn test_url_passes_through_unchanged() {
        let resolved = resolve("https://example.com", &settings());
        assert_eq!(resolved, InputResolution::Navigate("https://example.com".to_string()));

        let resolved = resolve("http://example.com/a?b=c", &settings());
        assert_eq!(resolved.into_url(), "http://example.com/a?b=c");
    }

    #[test]
    fn test_plain_text_becomes_search() {
        let resolved = resolve("cats", &settings());
        assert_eq!(resolved, InputResolution::Search("https://s.example/?q=cats".to_string()));
    }

    #[test]
    fn test_query_substituted_verbatim() {
        // No escaping: spaces and reserved characters pass through as typed.
        let resolved = resolve("rust & cats", &settings());
        assert_eq!(resolved.into_url(), "https://s.example/?q=rust & cats");
    }

    #[test]
    fn test_prefix_check_is_case_sensitive() {
        let resolved = resolve("HTTPS://EXAMPLE.COM", &settings());
        assert!(matches!(resolved, InputResolution::Search(_)));
    }

    #[test]
    fn test_empty_input_yields_valid_search_url() {
        let resolved = resolve("", &settings());
        assert_eq!(resolved.into_url(), "https://s.example/?q=");
    }
}
