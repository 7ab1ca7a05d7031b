//! Type-to-find over a directory listing.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::fs::entry::Entry;

/// A listed entry paired with its fuzzy match score and the byte indices
/// in the entry name that matched the query.
#[derive(Debug, Clone)]
pub struct FuzzyMatch {
    entry: Entry,
    score: i64,
    matched_indices: Vec<usize>,
}

impl FuzzyMatch {
    #[must_use]
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Match score; higher is better. `0` when the query was empty.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Byte indices in the entry name that matched the query.
    #[must_use]
    pub fn matched_indices(&self) -> &[usize] {
        &self.matched_indices
    }
}

/// Fuzzy-matches `query` against each entry's name.
///
/// Results are sorted by score, highest first. Equal scores keep listing
/// order. An empty query returns every entry with a score of `0`.
pub fn fuzzy_filter(listing: &[Entry], query: &str) -> Vec<FuzzyMatch> {
    if query.is_empty() {
        return listing
            .iter()
            .map(|e| FuzzyMatch {
                entry: e.clone(),
                score: 0,
                matched_indices: Vec::new(),
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default();

    let mut matches: Vec<FuzzyMatch> = listing
        .iter()
        .filter_map(|e| {
            matcher
                .fuzzy_indices(e.name(), query)
                .map(|(score, indices)| FuzzyMatch {
                    entry: e.clone(),
                    score,
                    matched_indices: indices,
                })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .map(|n| Entry::new(PathBuf::from("/d").join(n), *n, Some(1), false, false))
            .collect()
    }

    #[test]
    fn exact_name_matches() {
        let listing = entries(&["README.md", "main.rs"]);
        let matches = fuzzy_filter(&listing, "README.md");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].entry().name(), "README.md");
    }

    #[test]
    fn partial_query_matches_subsequence() {
        let listing = entries(&["documents", "downloads", "music"]);
        let matches = fuzzy_filter(&listing, "doc");
        assert!(matches.iter().any(|m| m.entry().name() == "documents"));
        assert!(!matches.iter().any(|m| m.entry().name() == "music"));
    }

    #[test]
    fn no_match_is_empty() {
        let listing = entries(&["a.txt", "b.txt"]);
        assert!(fuzzy_filter(&listing, "zzzzzz").is_empty());
    }

    #[test]
    fn empty_query_returns_all_in_order() {
        let listing = entries(&["b", "a", "c"]);
        let matches = fuzzy_filter(&listing, "");
        let names: Vec<&str> = matches.iter().map(|m| m.entry().name()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(matches.iter().all(|m| m.score() == 0));
    }

    #[test]
    fn best_match_first() {
        let listing = entries(&["xfxoxo", "foo"]);
        let matches = fuzzy_filter(&listing, "foo");
        assert_eq!(matches[0].entry().name(), "foo");
    }

    #[test]
    fn case_insensitive_for_lowercase_query() {
        let listing = entries(&["MyFile.txt"]);
        assert_eq!(fuzzy_filter(&listing, "myfile").len(), 1);
    }

    #[test]
    fn matched_indices_reported() {
        let listing = entries(&["hello.txt"]);
        let matches = fuzzy_filter(&listing, "hel");
        assert_eq!(matches[0].matched_indices(), &[0, 1, 2]);
    }
}
