//! Summarizer configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{SegmenterKind, Vocabulary};

/// Top-level Review Digest configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Requested number of extracted sentences for large comment sets.
    pub target_sentences: usize,
    /// Segmenter used by the extractive strategy.
    pub segmenter: SegmenterKind,
    /// A lone comment up to this many characters is returned as-is.
    pub single_comment_limit: usize,
    /// Same limit, applied when the composer handles a lone comment.
    pub fallback_single_comment_limit: usize,
    /// Comment sets with a shorter average length skip extraction.
    pub min_average_length: usize,
    /// Extracted summaries shorter than this are rejected.
    pub min_summary_length: usize,
    /// Keyword lists for scoring and sentiment.
    pub vocabulary: Vocabulary,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            target_sentences: 2,
            segmenter: SegmenterKind::default(),
            single_comment_limit: 200,
            fallback_single_comment_limit: 150,
            min_average_length: 15,
            min_summary_length: 20,
            vocabulary: Vocabulary::default(),
        }
    }
}

impl DigestConfig {
    /// Create configuration from environment and defaults.
    ///
    /// - `DIGEST_TARGET_SENTENCES`: positive integer
    /// - `DIGEST_SEGMENTER`: `plain`, `annotated` or `none`
    /// - `DIGEST_VOCABULARY`: path to a JSON vocabulary file
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("DIGEST_TARGET_SENTENCES") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.target_sentences = n,
                _ => warn!("Ignoring DIGEST_TARGET_SENTENCES={:?}; using {}", raw, config.target_sentences),
            }
        }

        if let Some(raw) = lookup("DIGEST_SEGMENTER") {
            match raw.parse::<SegmenterKind>() {
                Ok(kind) => config.segmenter = kind,
                Err(e) => warn!("{}; using {}", e, config.segmenter),
            }
        }

        if let Some(path) = lookup("DIGEST_VOCABULARY") {
            config.vocabulary = Vocabulary::from_file(path.trim())?;
        }

        Ok(config)
    }
}
