//! Text normalization for title search.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How a query and a title are folded before the substring test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchNormalization {
    /// Lowercase only. "Programación" does not match "programacion".
    #[default]
    Lowercase,
    /// Canonical decomposition, combining marks dropped, then lowercase.
    /// "Programación" and "programacion" match each other.
    AccentInsensitive,
}

impl SearchNormalization {
    pub fn normalize(self, text: &str) -> String {
        match self {
            SearchNormalization::Lowercase => text.to_lowercase(),
            SearchNormalization::AccentInsensitive => text
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .collect::<String>()
                .to_lowercase(),
        }
    }

    /// True when the normalized `query` occurs in the normalized `title`.
    /// An empty query matches everything.
    pub fn matches(self, query: &str, title: &str) -> bool {
        self.normalize(title).contains(&self.normalize(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_is_case_insensitive_only() {
        let n = SearchNormalization::Lowercase;
        assert!(n.matches("RUST", "Learning rust"));
        assert!(!n.matches("programacion", "Programación funcional"));
        assert!(n.matches("programación", "PROGRAMACIÓN funcional"));
    }

    #[test]
    fn test_accent_insensitive_both_directions() {
        let n = SearchNormalization::AccentInsensitive;
        assert!(n.matches("programacion", "Programación funcional"));
        assert!(n.matches("PROGRAMACIÓN", "programacion funcional"));
        assert!(n.matches("nino", "El Niño"));
        assert_eq!(n.normalize("Ça Über"), "ca uber");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        for n in [SearchNormalization::Lowercase, SearchNormalization::AccentInsensitive] {
            assert!(n.matches("", "anything"));
            assert!(n.matches("", ""));
        }
    }
}
