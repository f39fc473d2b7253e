//! Fit report structure and keyword display policy

use crate::analysis::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel rendered in place of an empty keyword list, so "no keywords"
/// is distinguishable from "not yet computed".
pub const EMPTY_LIST_SENTINEL: &str = "None";

/// Match result plus run metadata, as consumed by the formatters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub result: MatchResult,
    pub resume_path: String,
    pub job_path: String,
    pub resume_keyword_count: usize,
    pub job_keyword_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl FitReport {
    pub fn new(
        result: MatchResult,
        resume_path: String,
        job_path: String,
        resume_keyword_count: usize,
    ) -> Self {
        let job_keyword_count = result.job_keyword_count();
        Self {
            result,
            resume_path,
            job_path,
            resume_keyword_count,
            job_keyword_count,
            generated_at: Utc::now(),
        }
    }
}

/// Apply the rendering policy to a keyword list: truncate to `cap` entries,
/// and render an empty list as the single sentinel entry.
pub fn display_keywords(keywords: &[String], cap: usize) -> Vec<String> {
    if keywords.is_empty() {
        return vec![EMPTY_LIST_SENTINEL.to_string()];
    }
    keywords.iter().take(cap).cloned().collect()
}
