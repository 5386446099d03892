use super::words::split_words;

/// A raw search pattern broken into its search words and flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPattern {
    pub search_words: Vec<String>,
    pub ignore_case: bool,
    pub match_ending: bool,
}

impl SearchPattern {
    /// Parse a raw pattern.
    ///
    /// - A trailing space anchors the match to the end of the name.
    /// - An all-lowercase pattern is case-insensitive. It is uppercased before
    ///   splitting so that every letter becomes its own search word (`fbb` ->
    ///   `F`, `B`, `B`).
    pub fn new(raw: &str) -> Self {
        let match_ending = raw.ends_with(' ');
        let trimmed = raw.trim();
        let ignore_case = trimmed.chars().all(char::is_lowercase);

        let normalized = if ignore_case {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        };

        let search_words = split_words(&normalized)
            .into_iter()
            .map(String::from)
            .collect();

        Self {
            search_words,
            ignore_case,
            match_ending,
        }
    }
}
