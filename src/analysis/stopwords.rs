//! Stopword list used by keyword extraction

use std::collections::HashSet;

/// Common English words excluded from keyword extraction.
///
/// Deliberately small: the goal is to drop glue words, not to approximate a
/// full NLP stopword corpus.
const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "a", "an", "of", "to", "in", "for", "on", "with", "at",
    "by", "from", "up", "about", "into", "over", "after", "is", "are",
    "was", "were", "be", "been", "being", "that", "this", "these", "those",
    "as", "it", "he", "she", "they", "them", "his", "her", "their", "you",
    "your", "i", "we", "our",
    // job-posting filler that says nothing about the role itself
    "looking", "seeking", "hiring", "apply",
];

/// Immutable set of words excluded from extraction.
///
/// Injected into [`KeywordExtractor`](crate::analysis::KeywordExtractor)
/// rather than living as a process-wide global, so tests and config can
/// substitute their own lists.
#[derive(Debug, Clone)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl Default for StopwordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_STOPWORDS.iter().map(|&w| w.to_string()).collect(),
        }
    }
}

impl StopwordList {
    /// Default list plus extra words from configuration.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in extra {
            list.words.insert(word.as_ref().to_lowercase());
        }
        list
    }

    /// An empty list, useful when extraction should keep every token.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
