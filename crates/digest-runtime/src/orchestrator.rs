//! Orchestrator: picks the summarization strategy for a comment set.
//!
//! Strategy policy, evaluated in order:
//! 1. no comments → canned text
//! 2. one comment → verbatim, or its first two sentences when long
//! 3. very short comments on average → composed
//! 4. segmenter unavailable → composed
//! 5. segment + score + select; any error or an insufficient result → composed

use serde::Serialize;
use tracing::{debug, warn};

use digest_core::{collapse_whitespace, Comment, CommentSet, DigestConfig, SummaryResult};
use digest_extract::{
    create_segmenter, ensure_terminated, join_sentences, Extraction, SentenceScorer,
    SentenceSegmenter,
};

use crate::composer::SummaryComposer;

/// Which path produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    NoComments,
    SingleComment,
    Extractive,
    Composed,
}

/// A summary together with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryOutcome {
    pub summary: String,
    pub strategy: Strategy,
}

impl SummaryOutcome {
    fn new(summary: String, strategy: Strategy) -> Self {
        Self { summary, strategy }
    }
}

/// Top-level summarizer that coordinates segmentation, scoring and composition.
pub struct Summarizer {
    config: DigestConfig,
    segmenter: Box<dyn SentenceSegmenter>,
    scorer: SentenceScorer,
    composer: SummaryComposer,
}

impl Summarizer {
    /// Create a summarizer with the segmenter named in `config`.
    pub fn new(config: DigestConfig) -> Self {
        let segmenter = create_segmenter(config.segmenter);
        Self::with_segmenter(config, segmenter)
    }

    /// Create with an explicit segmenter.
    pub fn with_segmenter(config: DigestConfig, segmenter: Box<dyn SentenceSegmenter>) -> Self {
        let scorer = SentenceScorer::new(&config.vocabulary)
            .with_min_summary_length(config.min_summary_length);
        let composer = SummaryComposer::new(&config);
        Self {
            config,
            segmenter,
            scorer,
            composer,
        }
    }

    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Summarize with the configured target sentence count.
    pub fn summarize(&self, comments: &CommentSet) -> String {
        self.summarize_with_target(comments, self.config.target_sentences)
    }

    pub fn summarize_with_target(&self, comments: &CommentSet, target: usize) -> String {
        self.summarize_detailed(comments, target).summary
    }

    /// Summarize and wrap the result for the process boundary.
    pub fn respond(&self, comments: &CommentSet) -> SummaryResult {
        SummaryResult::ok(self.summarize(comments))
    }

    pub fn summarize_detailed(&self, comments: &CommentSet, target: usize) -> SummaryOutcome {
        if comments.is_empty() {
            return SummaryOutcome::new(SummaryResult::NO_COMMENTS.to_string(), Strategy::NoComments);
        }

        if comments.len() == 1 {
            if let Some(comment) = comments.first() {
                return SummaryOutcome::new(self.summarize_single(comment), Strategy::SingleComment);
            }
        }

        let avg_length = comments.average_length();
        if avg_length < self.config.min_average_length as f64 {
            debug!(
                "Average comment length {:.1} below {}, composing",
                avg_length, self.config.min_average_length
            );
            return self.composed(comments);
        }

        match self.try_extractive(comments, target) {
            Some(summary) => SummaryOutcome::new(summary, Strategy::Extractive),
            None => self.composed(comments),
        }
    }

    fn composed(&self, comments: &CommentSet) -> SummaryOutcome {
        SummaryOutcome::new(self.composer.compose(comments), Strategy::Composed)
    }

    fn summarize_single(&self, comment: &Comment) -> String {
        if comment.char_len() <= self.config.single_comment_limit {
            return comment.text.clone();
        }

        if self.segmenter.is_available() {
            match self.segmenter.segment(&comment.text) {
                Ok(sentences) if !sentences.is_empty() => {
                    let head = &sentences[..sentences.len().min(2)];
                    let summary = join_sentences(head);
                    if !summary.is_empty() {
                        return ensure_terminated(summary);
                    }
                }
                Ok(_) => debug!("Segmenter found no sentences in single comment"),
                Err(e) => warn!("Segmenter {} failed: {}", self.segmenter.name(), e),
            }
        }

        self.composer.compose_single(&comment.text)
    }

    /// Segment, score and select. `None` means the caller should compose.
    fn try_extractive(&self, comments: &CommentSet, target: usize) -> Option<String> {
        if !self.segmenter.is_available() {
            debug!("Segmenter {} unavailable, composing", self.segmenter.name());
            return None;
        }

        // Comment boundaries are always sentence boundaries. Whitespace is
        // collapsed here only, so quoted and single comments keep their text.
        let mut sentences: Vec<String> = Vec::new();
        for comment in comments {
            match self.segmenter.segment(&collapse_whitespace(&comment.text)) {
                Ok(parts) => sentences.extend(parts),
                Err(e) => {
                    warn!("Segmenter {} failed: {}", self.segmenter.name(), e);
                    return None;
                }
            }
        }

        if sentences.is_empty() {
            debug!("No sentences found, composing");
            return None;
        }

        match self.scorer.select(&sentences, self.segmenter.annotator(), target) {
            Extraction::Summary(summary) => {
                debug!(
                    "Extracted summary from {} sentences via {}",
                    sentences.len(),
                    self.segmenter.name()
                );
                Some(summary)
            }
            Extraction::Insufficient => None,
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DigestConfig::default())
    }
}
