pub mod pattern;
pub mod query;
pub mod words;

use pattern::SearchPattern;
use query::{contains, locate, WildcardQuery};
use words::split_words;

/// A search pattern parsed once and matched against many class names.
#[derive(Debug, Clone)]
pub struct Matcher {
    raw: String,
    pattern: SearchPattern,
    // Reversed when the pattern is anchored at the end
    queries: Vec<WildcardQuery>,
}

enum Attempt {
    Matched,
    Rejected,
    Aborted,
}

impl Matcher {
    pub fn new(raw: &str) -> Self {
        let pattern = SearchPattern::new(raw);

        let mut queries: Vec<WildcardQuery> = pattern
            .search_words
            .iter()
            .map(|word| WildcardQuery::parse(word))
            .collect();
        if pattern.match_ending {
            queries.reverse();
        }

        tracing::debug!(
            pattern = %raw,
            words = ?pattern.search_words,
            ignore_case = pattern.ignore_case,
            match_ending = pattern.match_ending,
            "parsed search pattern"
        );

        Self {
            raw: raw.to_string(),
            pattern,
            queries,
        }
    }

    pub fn pattern(&self) -> &SearchPattern {
        &self.pattern
    }

    /// Check whether a simple class name matches the pattern
    pub fn is_match(&self, name: &str) -> bool {
        // Plain substring hit for case-insensitive patterns, on top of the
        // word-based match below
        if self.pattern.ignore_case && contains(name, &self.raw, true) {
            return true;
        }

        let mut words = split_words(name);
        if self.queries.is_empty() || self.queries.len() > words.len() {
            return false;
        }
        if self.pattern.match_ending {
            words.reverse();
        }

        for offset in 0..=words.len() - self.queries.len() {
            match self.attempt(&words, offset) {
                Attempt::Matched => return true,
                Attempt::Rejected => continue,
                Attempt::Aborted => return false,
            }
        }

        false
    }

    /// Consume every query left to right starting at `offset`.
    ///
    /// The first query may skip forward to its anchor, every following one
    /// must sit on the next word. End-anchored patterns allow no skip at all,
    /// and a failed attempt rules out the whole name.
    fn attempt(&self, words: &[&str], offset: usize) -> Attempt {
        let mut cursor = offset;

        for (i, query) in self.queries.iter().enumerate() {
            let contiguous = i > 0 || self.pattern.match_ending;

            match locate(words, cursor, query, self.pattern.ignore_case) {
                Some(idx) if !(contiguous && idx > cursor) => cursor = idx + 1,
                _ if self.pattern.match_ending => return Attempt::Aborted,
                _ => return Attempt::Rejected,
            }
        }

        Attempt::Matched
    }
}

/// Check whether `name` matches the raw search `pattern`.
///
/// Prefer [`Matcher`] when the same pattern is checked against many names.
pub fn matches(name: &str, pattern: &str) -> bool {
    Matcher::new(pattern).is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let cases = [
            ("FooBarBaz", "BaBa"),
            ("FooBarBaz", "BarBaz"),
            ("FooBarBaz", "FoBa"),
            ("FooBarBaz", "FB"),
            ("FooBarBaz", "B*rBaz"),
            ("FooBarBaz", "B*Baz"),
            ("FooBarBaz", "*Baz"),
            ("FooBar", "FB"),
            ("FooBar", "F*oBa"),
            ("FooBar", "*oBa"),
            ("FooBar", "*Ba"),
            ("FooBarBaz", "FBar"),
            ("FooBar", "FBar "),
            ("FooBarzoo", "FBar "),
        ];
        for (name, pattern) in cases {
            assert!(matches(name, pattern), "{name} should match {pattern:?}");
        }
    }

    #[test]
    fn test_no_match() {
        let cases = [
            ("FooBar", "FBB"),
            ("FooBar", "BB"),
            ("FooBar", "Bo"),
            ("FooBarBaz", "FBar "),
            ("FooBarBaz", "BrBaz"),
            ("FooBarBaz", "FBaz"),
        ];
        for (name, pattern) in cases {
            assert!(!matches(name, pattern), "{name} should not match {pattern:?}");
        }
    }

    #[test]
    fn test_lowercase_pattern() {
        assert!(matches("FooBarBaz", "fbb"));
        assert!(matches("FooBarBaz", "fb"));
        assert!(matches("FooBarBaz", "fbb "));
        assert!(!matches("FooBarBaz", "fb "));
        assert!(!matches("FooBar", "fbb"));
    }

    #[test]
    fn test_lowercase_substring_fast_path() {
        // "arba" is no camel-case abbreviation but is a substring
        assert!(matches("FooBarBaz", "arba"));
        assert!(matches("FooBarBaz", "foobarbaz"));
        assert!(!matches("FooBarBaz", "Arba"));
        assert!(matches("ÄpfelÖl", "pfelö"));
    }

    #[test]
    fn test_only_last_wildcard_splits_a_word() {
        // "Fo*o" before the last wildcard is a literal prefix, not a glob
        assert!(!matches("FoxooBar", "Fo*o*oB"));
        assert!(matches("Fo*oxoBar", "Fo*o*oB"));
        assert!(matches("FoxoBar", "Fo**oB"));
    }

    #[test]
    fn test_end_anchor_requires_tail() {
        assert!(matches("FooBarBaz", "BarBaz "));
        assert!(matches("FooBarBaz", "Baz "));
        assert!(!matches("FooBarBaz", "Bar "));
        assert!(!matches("FooBarBaz", "FooBaz "));
    }

    #[test]
    fn test_first_word_may_start_anywhere() {
        assert!(matches("AbstractFooBarFactory", "BarF"));
        assert!(matches("FooBarFooBaz", "FooBaz"));
        assert!(!matches("FooBarFooBaz", "BarBaz"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(matches("FooBar", ""));
        assert!(!matches("FooBar", "   "));
        assert!(!matches("", "F"));
    }

    #[test]
    fn test_matcher_reuse_is_consistent() {
        let matcher = Matcher::new("FB");
        assert_eq!(matcher.pattern().search_words, vec!["F", "B"]);
        for name in ["FooBar", "FooBarBaz", "Bar", "BarFoo"] {
            assert_eq!(matcher.is_match(name), matches(name, "FB"));
        }
        assert!(matcher.is_match("FooBar"));
        assert!(!matcher.is_match("BarFoo"));
    }

    #[test]
    fn test_matcher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Matcher>();
    }
}
