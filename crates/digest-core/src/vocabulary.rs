//! Word lists used by the sentence scorer and sentiment classifier.
//!
//! All matching against these lists is lower-case substring matching, so
//! entries must be lower-case. A vocabulary file only needs the keys it
//! wants to replace; missing keys keep the built-in lists.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const REVIEW_KEYWORDS: &[&str] = &[
    "quality", "delivery", "shipping", "price", "value", "worth", "recommend",
    "excellent", "great", "good", "amazing", "perfect", "love", "satisfied",
    "problem", "issue", "disappointed", "late", "slow", "fast", "quick",
    "broken", "defective", "material", "durable", "packaging", "service",
];

const PRAISE_MARKERS: &[&str] = &[
    "excellent", "great", "good", "amazing", "perfect", "love", "satisfied", "recommend",
];

const COMPLAINT_MARKERS: &[&str] = &[
    "problem", "issue", "disappointed", "late", "slow", "broken", "defective",
];

const POSITIVE_TERMS: &[&str] = &[
    "good", "great", "excellent", "amazing", "love", "perfect", "wonderful",
    "awesome", "fantastic", "best", "nice", "happy", "satisfied", "recommend",
    "fast", "quick", "easy", "beautiful", "quality", "worth", "lovely",
    "exceeded", "outstanding", "brilliant", "superb", "pleased", "impressed",
];

const NEGATIVE_TERMS: &[&str] = &[
    "bad", "poor", "terrible", "awful", "worst", "slow", "difficult",
    "problem", "issue", "disappointed", "broken", "wrong", "waste", "late",
    "horrible", "disappointing", "unhappy", "complaint", "defective", "damaged",
    "faulty", "useless", "rubbish", "garbage", "regret", "refund", "return",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Process-wide keyword configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Review-domain terms; each distinct hit adds to a sentence's score.
    pub review_keywords: Vec<String>,
    /// Positive words that earn a sentence the praise bonus.
    pub praise_markers: Vec<String>,
    /// Negative words that earn a sentence the complaint bonus.
    pub complaint_markers: Vec<String>,
    /// Positive sentiment terms counted by the classifier.
    pub positive_terms: Vec<String>,
    /// Negative sentiment terms counted by the classifier.
    pub negative_terms: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            review_keywords: owned(REVIEW_KEYWORDS),
            praise_markers: owned(PRAISE_MARKERS),
            complaint_markers: owned(COMPLAINT_MARKERS),
            positive_terms: owned(POSITIVE_TERMS),
            negative_terms: owned(NEGATIVE_TERMS),
        }
    }
}

impl Vocabulary {
    /// Load a vocabulary from a JSON file, lower-casing every entry.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::Config(format!("cannot read vocabulary {}: {}", path.display(), e))
        })?;
        let vocabulary: Vocabulary = serde_json::from_str(&raw)?;
        Ok(vocabulary.normalized())
    }

    fn normalized(mut self) -> Self {
        for list in [
            &mut self.review_keywords,
            &mut self.praise_markers,
            &mut self.complaint_markers,
            &mut self.positive_terms,
            &mut self.negative_terms,
        ] {
            for word in list.iter_mut() {
                *word = word.trim().to_lowercase();
            }
            let mut seen = HashSet::new();
            list.retain(|w| !w.is_empty() && seen.insert(w.clone()));
        }
        self
    }
}
