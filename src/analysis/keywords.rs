//! Keyword extraction and the keyword set type

use crate::analysis::stopwords::StopwordList;
use regex::Regex;
use std::collections::HashSet;

/// Deduplicated set of keywords that remembers insertion order.
///
/// Matching only needs membership, but rendering and the match partition
/// need a stable order, so the order of first insertion is carried
/// explicitly instead of relying on hash iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyword; duplicates collapse. Returns true if newly added.
    pub fn insert(&mut self, keyword: String) -> bool {
        if self.members.contains(&keyword) {
            return false;
        }
        self.members.insert(keyword.clone());
        self.ordered.push(keyword);
        true
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.members.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Keywords in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(|s| s.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}

/// Normalizes raw text into a [`KeywordSet`].
///
/// Total over all string input: garbled text from a binary file falls
/// through the same pipeline and simply produces odd keywords, never an
/// error.
pub struct KeywordExtractor {
    stopwords: StopwordList,
    min_token_len: usize,
    separator_regex: Regex,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(StopwordList::default(), 3)
    }
}

impl KeywordExtractor {
    pub fn new(stopwords: StopwordList, min_token_len: usize) -> Self {
        // Digits, underscores, and anything that is not a word character
        // all act as token separators.
        let separator_regex = Regex::new(r"[\d\W_]+").expect("Invalid separator regex");

        Self {
            stopwords,
            min_token_len,
            separator_regex,
        }
    }

    /// Extract the significant keywords from raw text.
    ///
    /// Lowercases, collapses every run of digits/underscores/punctuation
    /// into a single space, splits on whitespace, then keeps tokens that
    /// are not stopwords and meet the minimum length.
    pub fn extract(&self, text: &str) -> KeywordSet {
        let lowered = text.to_lowercase();
        let separated = self.separator_regex.replace_all(&lowered, " ");

        separated
            .split_whitespace()
            .filter(|word| !self.stopwords.contains(word))
            .filter(|word| word.chars().count() >= self.min_token_len)
            .map(|word| word.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::default()
    }

    #[test]
    fn test_extracts_lowercased_keywords() {
        let keywords = extractor().extract("Experienced Python developer");
        assert!(keywords.contains("experienced"));
        assert!(keywords.contains("python"));
        assert!(keywords.contains("developer"));
    }

    #[test]
    fn test_filters_stopwords_and_short_tokens() {
        let keywords = extractor().extract("the cat sat on a big mat with it");
        assert!(!keywords.contains("the"));
        assert!(!keywords.contains("on"));
        assert!(!keywords.contains("it"));
        // "cat", "sat", "big", "mat" survive: not stopwords, length 3
        assert_eq!(keywords.len(), 4);
    }

    #[test]
    fn test_punctuation_and_digits_separate_tokens() {
        let keywords = extractor().extract("rust/python,golang v2.0 foo_bar 2024kotlin");
        assert!(keywords.contains("rust"));
        assert!(keywords.contains("python"));
        assert!(keywords.contains("golang"));
        assert!(keywords.contains("foo"));
        assert!(keywords.contains("bar"));
        assert!(keywords.contains("kotlin"));
        assert!(!keywords.contains("foo_bar"));
    }

    #[test]
    fn test_duplicates_collapse_keeping_first_position() {
        let keywords = extractor().extract("python java python rust java");
        let ordered: Vec<&str> = keywords.iter().collect();
        assert_eq!(ordered, vec!["python", "java", "rust"]);
    }

    #[test]
    fn test_empty_and_stopword_only_input() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("the and of to in").is_empty());
        assert!(extractor().extract("a an it he we").is_empty());
        assert!(extractor().extract("12345 --- __ !!!").is_empty());
    }

    #[test]
    fn test_no_token_contains_whitespace_or_is_short() {
        let keywords = extractor().extract("Build scalable systems; ship early, ship often! 24/7");
        for word in keywords.iter() {
            assert!(!word.contains(char::is_whitespace));
            assert!(word.chars().count() > 2);
            assert!(!StopwordList::default().contains(word));
        }
    }

    #[test]
    fn test_extract_is_idempotent_on_its_own_output() {
        let ex = extractor();
        let text = "Senior Rust engineer: distributed systems, observability & 10x delivery";
        let first = ex.extract(text);
        let rejoined: String = first.as_slice().join(" ");
        let second = ex.extract(&rejoined);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_stopwords_and_min_length() {
        let ex = KeywordExtractor::new(StopwordList::with_extra(["python"]), 5);
        let keywords = ex.extract("python rust kotlin");
        assert!(!keywords.contains("python"));
        assert!(!keywords.contains("rust"));
        assert!(keywords.contains("kotlin"));
    }
}
