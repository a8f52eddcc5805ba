//! Review Digest Extract: sentence segmentation, heuristic sentence scoring,
//! and keyword/rating sentiment classification.
//!
//! Everything here is deterministic and dependency-light: segmenters split on
//! punctuation, annotations come from capitalization and verb patterns, and
//! scoring is a weighted sum of keyword, length, position and sentiment factors.

pub mod annotate;
pub mod scorer;
pub mod segment;
pub mod sentiment;

pub use annotate::HeuristicAnnotator;
pub use scorer::{ensure_terminated, join_sentences, word_count, Extraction, SentenceScorer};
pub use segment::{
    create_segmenter, AnnotatedSegmenter, PunctuationSegmenter, SentenceAnnotator,
    SentenceSegmenter, UnavailableSegmenter,
};
pub use sentiment::SentimentClassifier;
