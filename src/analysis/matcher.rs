//! Keyword match analysis between resume and job description

use crate::analysis::keywords::KeywordSet;
use serde::{Deserialize, Serialize};

/// Result of comparing a resume keyword set against a job keyword set.
///
/// `matching` and `missing` partition the job keyword set: their union is
/// exactly the job keywords, they are disjoint, and both preserve the job
/// set's insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage of job keywords found in the resume, 0-100.
    pub score: u8,
    pub matching: Vec<String>,
    pub missing: Vec<String>,
}

impl MatchResult {
    pub fn job_keyword_count(&self) -> usize {
        self.matching.len() + self.missing.len()
    }
}

/// Compares two keyword sets. Pure and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAnalyzer;

impl MatchAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Partition the job keywords into matching/missing and score the overlap.
    ///
    /// Score is `round(100 * matching / job_keywords)`, or 0 when the job
    /// set is empty.
    pub fn analyze(&self, resume_keywords: &KeywordSet, job_keywords: &KeywordSet) -> MatchResult {
        let mut matching = Vec::new();
        let mut missing = Vec::new();

        for keyword in job_keywords.iter() {
            if resume_keywords.contains(keyword) {
                matching.push(keyword.to_string());
            } else {
                missing.push(keyword.to_string());
            }
        }

        let score = if job_keywords.is_empty() {
            0
        } else {
            let ratio = matching.len() as f64 / job_keywords.len() as f64;
            (ratio * 100.0).round() as u8
        };

        MatchResult {
            score,
            matching,
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::keywords::KeywordExtractor;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_partition_invariants() {
        let resume = set(&["rust", "tokio", "grpc", "postgres"]);
        let job = set(&["rust", "kubernetes", "grpc", "terraform"]);

        let result = MatchAnalyzer::new().analyze(&resume, &job);

        let mut union: Vec<&str> = result
            .matching
            .iter()
            .chain(result.missing.iter())
            .map(|s| s.as_str())
            .collect();
        union.sort_unstable();
        let mut expected: Vec<&str> = job.iter().collect();
        expected.sort_unstable();
        assert_eq!(union, expected);

        for word in &result.matching {
            assert!(!result.missing.contains(word));
        }
    }

    #[test]
    fn test_order_follows_job_set() {
        let resume = set(&["beta", "delta"]);
        let job = set(&["alpha", "beta", "gamma", "delta"]);

        let result = MatchAnalyzer::new().analyze(&resume, &job);

        assert_eq!(result.matching, vec!["beta", "delta"]);
        assert_eq!(result.missing, vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_empty_job_set_scores_zero() {
        let resume = set(&["rust", "python"]);
        let job = KeywordSet::new();

        let result = MatchAnalyzer::new().analyze(&resume, &job);

        assert_eq!(result.score, 0);
        assert!(result.matching.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_full_coverage_scores_hundred() {
        let resume = set(&["rust", "tokio", "serde", "clap"]);
        let job = set(&["tokio", "serde"]);

        let result = MatchAnalyzer::new().analyze(&resume, &job);

        assert_eq!(result.score, 100);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_score_rounds_to_nearest() {
        // 1 of 3 matches: 33.33 rounds down
        let result = MatchAnalyzer::new().analyze(&set(&["one"]), &set(&["one", "two", "six"]));
        assert_eq!(result.score, 33);

        // 2 of 3 matches: 66.67 rounds up
        let result =
            MatchAnalyzer::new().analyze(&set(&["one", "two"]), &set(&["one", "two", "six"]));
        assert_eq!(result.score, 67);
    }

    #[test]
    fn test_python_developer_scenario() {
        let extractor = KeywordExtractor::default();
        let resume =
            extractor.extract("Experienced Python developer with data analysis skills");
        let job = extractor
            .extract("Looking for a Python developer with machine learning experience");

        let result = MatchAnalyzer::new().analyze(&resume, &job);

        for keyword in ["python", "developer", "machine", "learning", "experience"] {
            assert!(job.contains(keyword), "job set missing: {}", keyword);
        }
        assert!(result.matching.contains(&"python".to_string()));
        assert!(result.matching.contains(&"developer".to_string()));
        assert_eq!(result.score, 40);
    }
}
