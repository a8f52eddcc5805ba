//! Review Digest Core: comment data model, configuration, vocabulary, errors.

pub mod capabilities;
pub mod comment;
pub mod config;
pub mod error;
pub mod vocabulary;

pub use capabilities::SegmenterKind;
pub use comment::{
    collapse_whitespace, Comment, CommentSet, ScoredSentence, SentimentVerdict, SummaryResult,
};
pub use config::DigestConfig;
pub use error::{Error, Result};
pub use vocabulary::Vocabulary;
