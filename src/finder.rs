use crate::error::{FinderError, Result};
use crate::matcher::Matcher;
use crate::parser::{self, ClassName};
use crate::Config;
use rayon::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct ClassFinder {
    excludes: Vec<Regex>,
    parallel_threshold: usize,
}

impl Default for ClassFinder {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ClassFinder {
    pub fn new(config: &Config) -> Self {
        Self {
            excludes: config.exclude_regexes(),
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Read class names from a file, one per line, and match them
    pub fn find_in_file(&self, path: &Path, pattern: &str) -> Result<Vec<ClassName>> {
        let content = fs::read_to_string(path).map_err(|source| FinderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.find_in_str(&content, pattern))
    }

    pub fn find_in_str(&self, content: &str, pattern: &str) -> Vec<ClassName> {
        self.find(parser::parse_lines(content), pattern)
    }

    /// Match candidates against `pattern`.
    ///
    /// Returns the matching classes without duplicates, sorted by simple name.
    /// Classes with the same simple name keep their input order.
    pub fn find(&self, candidates: Vec<ClassName>, pattern: &str) -> Vec<ClassName> {
        let matcher = Matcher::new(pattern);
        let total = candidates.len();

        let candidates: Vec<ClassName> = if self.excludes.is_empty() {
            candidates
        } else {
            candidates
                .into_iter()
                .filter(|class| !self.is_excluded(class))
                .collect()
        };

        let matched: Vec<ClassName> = if candidates.len() >= self.parallel_threshold {
            candidates
                .into_par_iter()
                .filter(|class| matcher.is_match(&class.name))
                .collect()
        } else {
            candidates
                .into_iter()
                .filter(|class| matcher.is_match(&class.name))
                .collect()
        };

        let mut seen = HashSet::new();
        let mut result: Vec<ClassName> = matched
            .into_iter()
            .filter(|class| seen.insert(class.clone()))
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(candidates = total, matches = result.len(), "matched class names");

        result
    }

    fn is_excluded(&self, class: &ClassName) -> bool {
        let qualified = class.qualified_name();
        self.excludes.iter().any(|re| re.is_match(&qualified))
    }
}

/// Match `candidates` against `pattern` and render the qualified names of the
/// matches, sorted by simple name.
pub fn find_matches(candidates: &[ClassName], pattern: &str) -> Vec<String> {
    ClassFinder::default()
        .find(candidates.to_vec(), pattern)
        .iter()
        .map(ClassName::qualified_name)
        .collect()
}
