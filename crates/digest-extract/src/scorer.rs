//! Heuristic sentence scoring and extractive selection.
//!
//! Scores sentences by review-keyword density, length band, optional
//! entity/verb richness, position, and sentiment markers, then picks the
//! best few and joins them back in source order.

use digest_core::{ScoredSentence, Vocabulary};

use crate::segment::SentenceAnnotator;

const KEYWORD_WEIGHT: f64 = 2.0;
const PREFERRED_LENGTH_BONUS: f64 = 1.5;
const ACCEPTABLE_LENGTH_BONUS: f64 = 1.0;
const ENTITY_WEIGHT: f64 = 1.0;
const VERB_BONUS: f64 = 1.0;
const MAX_POSITION_DISCOUNT: f64 = 0.2;
const SENTIMENT_BONUS: f64 = 1.5;
const SHORT_SENTENCE_WORDS: usize = 5;
const SHORT_SENTENCE_FACTOR: f64 = 0.5;
const MAX_EXTRACTED: usize = 3;

/// Outcome of extractive selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Joined summary of the selected sentences.
    Summary(String),
    /// Nothing usable could be extracted; callers should compose instead.
    Insufficient,
}

/// Number of words in a sentence, ignoring punctuation-only tokens.
pub fn word_count(sentence: &str) -> usize {
    sentence
        .split_whitespace()
        .filter(|token| token.chars().any(|c| c.is_alphanumeric()))
        .count()
}

/// Scores candidate sentences against a review vocabulary.
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    review_keywords: Vec<String>,
    praise_markers: Vec<String>,
    complaint_markers: Vec<String>,
    min_summary_length: usize,
}

impl SentenceScorer {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            review_keywords: vocabulary.review_keywords.clone(),
            praise_markers: vocabulary.praise_markers.clone(),
            complaint_markers: vocabulary.complaint_markers.clone(),
            min_summary_length: 20,
        }
    }

    /// Set the shortest joined summary accepted by [`select`](Self::select).
    pub fn with_min_summary_length(mut self, chars: usize) -> Self {
        self.min_summary_length = chars;
        self
    }

    /// Score one sentence at `index` out of `total`.
    pub fn score_sentence(
        &self,
        sentence: &str,
        index: usize,
        total: usize,
        annotator: Option<&dyn SentenceAnnotator>,
    ) -> f64 {
        let lower = sentence.to_lowercase();
        let words = word_count(sentence);
        let mut score = 0.0;

        let keyword_hits = self
            .review_keywords
            .iter()
            .filter(|kw| lower.contains(kw.as_str()))
            .count();
        score += keyword_hits as f64 * KEYWORD_WEIGHT;

        if (8..=25).contains(&words) {
            score += PREFERRED_LENGTH_BONUS;
        } else if (5..=30).contains(&words) {
            score += ACCEPTABLE_LENGTH_BONUS;
        }

        if let Some(annotator) = annotator {
            score += annotator.entity_count(sentence) as f64 * ENTITY_WEIGHT;
            if annotator.has_verb(sentence) {
                score += VERB_BONUS;
            }
        }

        // Later sentences lose up to 20%
        let total = total.max(1) as f64;
        score *= 1.0 - (index as f64 / total) * MAX_POSITION_DISCOUNT;

        if self.praise_markers.iter().any(|w| lower.contains(w.as_str())) {
            score += SENTIMENT_BONUS;
        }
        if self.complaint_markers.iter().any(|w| lower.contains(w.as_str())) {
            score += SENTIMENT_BONUS;
        }

        if words < SHORT_SENTENCE_WORDS {
            score *= SHORT_SENTENCE_FACTOR;
        }

        score
    }

    /// Score all sentences, best first. Equal scores keep source order.
    pub fn score(
        &self,
        sentences: &[String],
        annotator: Option<&dyn SentenceAnnotator>,
    ) -> Vec<ScoredSentence> {
        let total = sentences.len();
        let mut scored: Vec<ScoredSentence> = sentences
            .iter()
            .enumerate()
            .map(|(i, sent)| ScoredSentence {
                text: sent.clone(),
                score: self.score_sentence(sent, i, total, annotator),
                original_index: i,
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// How many sentences to extract from a corpus of `total` sentences.
    pub fn extraction_count(total: usize, target: usize) -> usize {
        if total <= 3 {
            1
        } else if total <= 6 {
            2
        } else {
            MAX_EXTRACTED.min(target).max(1)
        }
    }

    /// Score, pick the top sentences, and join them in source order.
    pub fn select(
        &self,
        sentences: &[String],
        annotator: Option<&dyn SentenceAnnotator>,
        target: usize,
    ) -> Extraction {
        if sentences.is_empty() {
            return Extraction::Insufficient;
        }

        let scored = self.score(sentences, annotator);
        let count = Self::extraction_count(sentences.len(), target);

        let mut selected: Vec<&ScoredSentence> = scored.iter().take(count).collect();
        selected.sort_by_key(|s| s.original_index);

        let texts: Vec<&str> = selected.iter().map(|s| s.text.as_str()).collect();
        let summary = join_sentences(&texts);
        if summary.chars().count() < self.min_summary_length {
            tracing::debug!(
                "Extracted summary too short ({} chars), rejecting",
                summary.chars().count()
            );
            return Extraction::Insufficient;
        }

        Extraction::Summary(ensure_terminated(summary))
    }
}

/// Join sentences with `". "`, dropping the terminators of all but the last.
pub fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    let last = sentences.len().saturating_sub(1);
    sentences
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let text = s.as_ref().trim();
            if i < last {
                text.trim_end_matches(['.', '!', '?'])
            } else {
                text
            }
        })
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(". ")
        .trim()
        .to_string()
}

/// Append a period unless the text already ends a sentence.
pub fn ensure_terminated(mut text: String) -> String {
    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}
