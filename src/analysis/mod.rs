//! Core text analysis: keyword extraction, match scoring, letter drafting

pub mod keywords;
pub mod letter;
pub mod matcher;
pub mod stopwords;

pub use keywords::{KeywordExtractor, KeywordSet};
pub use letter::CoverLetterComposer;
pub use matcher::{MatchAnalyzer, MatchResult};
pub use stopwords::StopwordList;
