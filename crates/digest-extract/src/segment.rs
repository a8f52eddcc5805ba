//! Sentence segmenter trait and implementations.
//!
//! The `SentenceSegmenter` trait abstracts over sentence boundary detection.
//! Implementations:
//! - `PunctuationSegmenter`: splits on `.`, `!`, `?`, no annotations
//! - `AnnotatedSegmenter`: same boundaries, plus entity/verb annotations
//! - `UnavailableSegmenter`: placeholder that signals extraction is off

use digest_core::{Error, Result, SegmenterKind};

use crate::annotate::HeuristicAnnotator;

/// Optional linguistic annotations a segmenter can expose.
pub trait SentenceAnnotator: Send + Sync {
    /// Number of named entities detected in the sentence.
    fn entity_count(&self, sentence: &str) -> usize;

    /// Whether the sentence contains at least one verb.
    fn has_verb(&self, sentence: &str) -> bool;
}

/// Trait for sentence segmentation backends.
pub trait SentenceSegmenter: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Check if the segmenter can be used.
    fn is_available(&self) -> bool {
        true
    }

    /// Split text into sentences, in order. Sentences keep their terminator.
    fn segment(&self, text: &str) -> Result<Vec<String>>;

    /// Linguistic annotations, when this backend provides them.
    fn annotator(&self) -> Option<&dyn SentenceAnnotator> {
        None
    }
}

/// Split text after `.`, `!` or `?` followed by whitespace or end of text.
///
/// A terminator only ends a sentence when whitespace follows it, so prices
/// like `"9.99"`, abbreviations glued to the next word and runs such as `"!!"`
/// or `"..."` stay inside one sentence. Pieces without any letter or digit are
/// dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let ends_sentence = matches!(c, '.' | '!' | '?')
            && chars.peek().map_or(false, |&(_, next)| next.is_whitespace());
        if ends_sentence {
            push_sentence(&mut sentences, &text[start..=i]);
            start = i + 1;
        }
    }
    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if piece.chars().any(char::is_alphanumeric) {
        sentences.push(piece);
    }
}

/// Punctuation-only segmenter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PunctuationSegmenter;

impl SentenceSegmenter for PunctuationSegmenter {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(split_sentences(text).into_iter().map(str::to_string).collect())
    }
}

/// Punctuation segmenter that also exposes heuristic annotations.
#[derive(Debug, Default)]
pub struct AnnotatedSegmenter {
    annotator: HeuristicAnnotator,
}

impl AnnotatedSegmenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SentenceSegmenter for AnnotatedSegmenter {
    fn name(&self) -> &'static str {
        "annotated"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>> {
        PunctuationSegmenter.segment(text)
    }

    fn annotator(&self) -> Option<&dyn SentenceAnnotator> {
        Some(&self.annotator)
    }
}

/// Placeholder segmenter that is never available (composed summaries only).
#[derive(Debug, Clone)]
pub struct UnavailableSegmenter {
    reason: String,
}

impl UnavailableSegmenter {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SentenceSegmenter for UnavailableSegmenter {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn segment(&self, _text: &str) -> Result<Vec<String>> {
        Err(Error::Segmenter(self.reason.clone()))
    }
}

/// Create the segmenter for the requested kind.
pub fn create_segmenter(kind: SegmenterKind) -> Box<dyn SentenceSegmenter> {
    if kind == SegmenterKind::None {
        tracing::info!("Sentence segmentation disabled. Using composed summaries only.");
        return Box::new(UnavailableSegmenter::new("segmentation disabled by configuration"));
    }

    let segmenter: Box<dyn SentenceSegmenter> = if kind.supports_annotations() {
        Box::new(AnnotatedSegmenter::new())
    } else {
        Box::new(PunctuationSegmenter)
    };
    tracing::debug!(
        "Using {} segmenter (annotations: {})",
        segmenter.name(),
        kind.supports_annotations()
    );
    segmenter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_terminators() {
        let sentences = split_sentences("Great value. Arrived late! Would I buy again? Yes");
        assert_eq!(
            sentences,
            vec!["Great value.", "Arrived late!", "Would I buy again?", "Yes"]
        );
    }

    #[test]
    fn test_split_handles_runs_and_decimals() {
        let sentences = split_sentences("Wow!!! It costs 9.99 only... Nice");
        assert_eq!(sentences, vec!["Wow!!!", "It costs 9.99 only...", "Nice"]);
    }

    #[test]
    fn test_split_needs_whitespace_after_terminator() {
        let sentences = split_sentences("Paid 9.99.Worth it.\nWould buy again");
        assert_eq!(sentences, vec!["Paid 9.99.Worth it.", "Would buy again"]);
    }

    #[test]
    fn test_split_drops_bare_punctuation() {
        assert!(split_sentences(" ... ! ").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_split_multibyte_text() {
        let sentences = split_sentences("Très bien. Ça marche.");
        assert_eq!(sentences, vec!["Très bien.", "Ça marche."]);
    }

    #[test]
    fn test_factory_kinds() {
        for kind in [SegmenterKind::None, SegmenterKind::Plain, SegmenterKind::Annotated] {
            let segmenter = create_segmenter(kind);
            assert_eq!(segmenter.annotator().is_some(), kind.supports_annotations());
        }

        let plain = create_segmenter(SegmenterKind::Plain);
        assert!(plain.is_available());
        assert!(plain.annotator().is_none());

        let annotated = create_segmenter(SegmenterKind::Annotated);
        assert!(annotated.is_available());
        assert!(annotated.annotator().is_some());

        let none = create_segmenter(SegmenterKind::None);
        assert!(!none.is_available());
        assert!(none.segment("Hello there.").is_err());
    }
}
