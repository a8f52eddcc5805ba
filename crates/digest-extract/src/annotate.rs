//! Heuristic sentence annotations: named entities and verb presence.
//!
//! Entities are capitalized words that do not start the sentence (brand and
//! product names, places, people). Verbs are found through a closed list of
//! common auxiliary and review verbs plus `-ed`/`-ing` inflections.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::segment::SentenceAnnotator;

static COMMON_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:is|are|was|were|be|been|am|has|have|had|do|does|did|can|could|will|would|should|must|love|loves|like|likes|hate|hates|work|works|fit|fits|look|looks|feel|feels|arrive|arrives|came|come|comes|broke|break|breaks|bought|buy|get|gets|got|make|makes|made|use|uses|recommend|recommends|need|needs|want|wants|keep|keeps|kept|took|take|takes|sent|send|ship|ships|stopped|stop|stops)\b",
    )
    .unwrap()
});

static INFLECTED_VERB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[a-z]{2,}(?:ed|ing)\b").unwrap());

/// Words ending in -ed/-ing that are rarely verbs in reviews.
const NON_VERB_INFLECTIONS: &[&str] = &[
    "thing", "things", "nothing", "something", "anything", "everything",
    "packaging", "shipping", "clothing", "ceiling", "morning", "evening",
    "bed", "red", "need", "speed", "seed", "feed", "hundred", "wicked",
];

/// Capitalized words that are not names when they appear mid-sentence.
const NON_ENTITY_WORDS: &[&str] = &["The", "This", "That", "And", "But", "Very", "Not"];

/// Annotator that derives entities and verbs from surface patterns.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicAnnotator;

impl HeuristicAnnotator {
    /// Distinct entity candidates in a sentence, in first-seen order.
    pub fn entities(&self, sentence: &str) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entities = Vec::new();

        // Capitalized words (proper nouns), skipping the sentence-start word
        for (i, word) in sentence.split_whitespace().enumerate() {
            if i == 0 {
                continue;
            }
            let cleaned: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
            let Some(first) = cleaned.chars().next() else {
                continue;
            };
            if cleaned.chars().count() > 2
                && first.is_uppercase()
                && !cleaned.chars().all(|c| c.is_uppercase())
                && !NON_ENTITY_WORDS.contains(&cleaned.as_str())
                && seen.insert(cleaned.clone())
            {
                entities.push(cleaned);
            }
        }
        entities
    }
}

impl SentenceAnnotator for HeuristicAnnotator {
    fn entity_count(&self, sentence: &str) -> usize {
        self.entities(sentence).len()
    }

    fn has_verb(&self, sentence: &str) -> bool {
        if COMMON_VERB_RE.is_match(sentence) {
            return true;
        }
        INFLECTED_VERB_RE.find_iter(sentence).any(|m| {
            let word = m.as_str().to_lowercase();
            !NON_VERB_INFLECTIONS.contains(&word.as_str())
        })
    }
}
