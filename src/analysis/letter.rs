//! Cover letter composition

/// Fallback used when no job title can be read out of the posting.
const FALLBACK_JOB_TITLE: &str = "the position";

/// Fallback used when there are no matching keywords to highlight.
const FALLBACK_HIGHLIGHTS: &str = "relevant areas";

/// Drafts a templated cover letter from the job posting, the candidate
/// name, and the top matching keywords.
///
/// Stateless and deterministic: the same inputs always produce the same
/// letter text.
#[derive(Debug, Clone)]
pub struct CoverLetterComposer {
    highlight_limit: usize,
}

impl Default for CoverLetterComposer {
    fn default() -> Self {
        Self { highlight_limit: 5 }
    }
}

impl CoverLetterComposer {
    pub fn new(highlight_limit: usize) -> Self {
        Self { highlight_limit }
    }

    /// Best-effort job title guess from the posting's first line.
    ///
    /// Takes the text up to the first newline, cuts it at the first comma,
    /// hyphen, or period, and trims. There is no guarantee this matches the
    /// actual title for arbitrary posting formats; an empty result falls
    /// back to "the position".
    pub fn job_title(&self, job_text: &str) -> String {
        let first_line = job_text.trim().lines().next().unwrap_or("");
        let before_delimiter = match first_line.find([',', '-', '.']) {
            Some(idx) => &first_line[..idx],
            None => first_line,
        };
        let title = before_delimiter.trim();

        if title.is_empty() {
            FALLBACK_JOB_TITLE.to_string()
        } else {
            title.to_string()
        }
    }

    /// Compose the letter. `top_matches` is the caller's matching-keyword
    /// list in rank order; only the first few are used as highlights.
    pub fn compose(&self, job_text: &str, candidate_name: &str, top_matches: &[String]) -> String {
        let job_title = self.job_title(job_text);

        let highlights: Vec<&str> = top_matches
            .iter()
            .take(self.highlight_limit)
            .map(|s| s.as_str())
            .collect();
        let highlights = if highlights.is_empty() {
            FALLBACK_HIGHLIGHTS.to_string()
        } else {
            highlights.join(", ")
        };

        format!(
            "Dear Hiring Manager,\n\n\
             I am writing to express my interest in {job_title}. \
             With my experience in {highlights}, I believe I can contribute effectively to your team. \
             My background includes accomplishments that align closely with the requirements listed in your job description.\n\n\
             In my previous roles, I have demonstrated the ability to adapt quickly, learn new technologies and work collaboratively. \
             I am confident that my skills make me a strong match for your needs and I would welcome the opportunity to discuss how I can bring value to your organisation.\n\n\
             Thank you for considering my application. I look forward to the possibility of discussing this opportunity further.\n\n\
             Sincerely,\n{candidate_name}"
        )
    }
}
