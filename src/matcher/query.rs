pub const WILDCARD: char = '*';

/// One search word split at its wildcard into a required prefix and suffix.
///
/// Only the last wildcard splits the word. Anything before it, including
/// earlier wildcards, is kept verbatim in `prefix`, so `A*B*C` means
/// "starts with `A*B`, ends with `C`".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WildcardQuery {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl WildcardQuery {
    pub fn parse(search_word: &str) -> Self {
        let normalized = collapse_wildcards(search_word);

        match normalized.rfind(WILDCARD) {
            Some(pos) => Self {
                prefix: non_empty(&normalized[..pos]),
                suffix: non_empty(&normalized[pos + WILDCARD.len_utf8()..]),
            },
            None => Self {
                prefix: non_empty(&normalized),
                suffix: None,
            },
        }
    }

    /// Check a single word against this query
    pub fn accepts(&self, word: &str, ignore_case: bool) -> bool {
        if let Some(prefix) = &self.prefix {
            if !starts_with(word, prefix, ignore_case) {
                return false;
            }
        }
        if let Some(suffix) = &self.suffix {
            if !ends_with(word, suffix, ignore_case) {
                return false;
            }
        }
        true
    }
}

/// Find the first word at or after `from` accepted by `query`.
pub fn locate(words: &[&str], from: usize, query: &WildcardQuery, ignore_case: bool) -> Option<usize> {
    if from >= words.len() {
        return None;
    }

    words[from..]
        .iter()
        .position(|word| query.accepts(word, ignore_case))
        .map(|pos| from + pos)
}

fn collapse_wildcards(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut previous_wildcard = false;

    for ch in word.chars() {
        if ch == WILDCARD {
            if !previous_wildcard {
                result.push(ch);
            }
            previous_wildcard = true;
        } else {
            result.push(ch);
            previous_wildcard = false;
        }
    }

    result
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Substring search with the same per-char case folding as prefix checks
pub fn contains(haystack: &str, needle: &str, ignore_case: bool) -> bool {
    if !ignore_case || needle.is_empty() {
        return haystack.contains(needle);
    }
    haystack
        .char_indices()
        .any(|(idx, _)| starts_with(&haystack[idx..], needle, true))
}

fn chars_eq(a: char, b: char, ignore_case: bool) -> bool {
    a == b || (ignore_case && a.to_lowercase().eq(b.to_lowercase()))
}

fn starts_with(word: &str, prefix: &str, ignore_case: bool) -> bool {
    if !ignore_case {
        return word.starts_with(prefix);
    }
    let mut chars = word.chars();
    prefix
        .chars()
        .all(|p| chars.next().is_some_and(|w| chars_eq(w, p, true)))
}

fn ends_with(word: &str, suffix: &str, ignore_case: bool) -> bool {
    if !ignore_case {
        return word.ends_with(suffix);
    }
    let mut chars = word.chars().rev();
    suffix
        .chars()
        .rev()
        .all(|s| chars.next().is_some_and(|w| chars_eq(w, s, true)))
}
