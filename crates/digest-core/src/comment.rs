//! Review comments and the values produced while summarizing them.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single review comment with an optional 1–5 star rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub rating: Option<u8>,
}

impl Comment {
    /// Build a comment from trimmed text. Returns `None` for blank text.
    ///
    /// Inner whitespace is kept as written.
    pub fn new(text: &str, rating: Option<u8>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let rating = rating.filter(|r| (1..=5).contains(r));
        Some(Self {
            text: text.to_string(),
            rating,
        })
    }

    /// Build a comment from one element of a JSON `comments` array.
    ///
    /// Strings become unrated comments, `{text, rating}` objects keep their
    /// rating, other scalars are stringified, `null` and blank text are skipped.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Self::new(s, None),
            serde_json::Value::Object(map) => {
                let text = map.get("text").and_then(|t| t.as_str())?;
                let rating = map.get("rating").and_then(parse_rating);
                Self::new(text, rating)
            }
            other => Self::new(&other.to_string(), None),
        }
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

fn parse_rating(value: &serde_json::Value) -> Option<u8> {
    let raw = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    let rounded = raw.round();
    if (1.0..=5.0).contains(&rounded) {
        Some(rounded as u8)
    } else {
        debug!("Dropping out-of-range rating {}", raw);
        None
    }
}

/// Replace every whitespace run with a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ordered collection of comments; insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentSet {
    comments: Vec<Comment>,
}

impl CommentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unrated comments from plain strings; blank strings are skipped.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .filter_map(|t| Comment::new(t.as_ref(), None))
            .collect()
    }

    /// Comments from `(text, rating)` pairs.
    pub fn from_rated<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<u8>)>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .filter_map(|(t, r)| Comment::new(t.as_ref(), r))
            .collect()
    }

    /// Comments from the elements of a JSON `comments` array.
    pub fn from_json_values(values: &[serde_json::Value]) -> Self {
        values.iter().filter_map(Comment::from_json).collect()
    }

    pub fn push(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.comments.iter()
    }

    pub fn first(&self) -> Option<&Comment> {
        self.comments.first()
    }

    /// Ratings that are present, in comment order.
    pub fn ratings(&self) -> impl Iterator<Item = u8> + '_ {
        self.comments.iter().filter_map(|c| c.rating)
    }

    /// Mean comment length in characters (0.0 for an empty set).
    pub fn average_length(&self) -> f64 {
        if self.comments.is_empty() {
            return 0.0;
        }
        let total: usize = self.comments.iter().map(Comment::char_len).sum();
        total as f64 / self.comments.len() as f64
    }

    /// All comment texts joined by single spaces and lower-cased.
    pub fn scan_buffer(&self) -> String {
        self.comments
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

impl FromIterator<Comment> for CommentSet {
    fn from_iter<T: IntoIterator<Item = Comment>>(iter: T) -> Self {
        Self {
            comments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CommentSet {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.iter()
    }
}

/// A candidate sentence and its heuristic score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub score: f64,
    /// Position of the sentence in the combined comment text.
    pub original_index: usize,
}

/// Keyword and rating evidence for one comment set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentVerdict {
    /// Distinct positive terms found, plus two per rating of 4 or 5.
    pub positive_count: usize,
    /// Distinct negative terms found, plus two per rating of 1 or 2.
    pub negative_count: usize,
    /// Mean of present ratings; `None` when no comment is rated.
    pub average_rating: Option<f64>,
    /// `positive / (positive + negative)`, 0.5 without evidence.
    pub sentiment_ratio: f64,
    /// Number of ratings ≤ 2.
    pub low_ratings: usize,
    /// Number of ratings ≥ 4.
    pub high_ratings: usize,
}

impl SentimentVerdict {
    pub fn has_low_ratings(&self) -> bool {
        self.low_ratings > 0
    }

    /// Low ratings are at least as common as high ones, and there is at least one.
    pub fn low_ratings_prevail(&self) -> bool {
        self.low_ratings > 0 && self.low_ratings >= self.high_ratings
    }

    /// Average rating is present and at or below `threshold`.
    pub fn average_at_most(&self, threshold: f64) -> bool {
        self.average_rating.map(|avg| avg <= threshold).unwrap_or(false)
    }

    /// Average rating is present and at or above `threshold`.
    pub fn average_at_least(&self, threshold: f64) -> bool {
        self.average_rating.map(|avg| avg >= threshold).unwrap_or(false)
    }
}

/// Returned to callers of the process boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub summary: String,
}

impl SummaryResult {
    pub const NO_COMMENTS: &'static str = "No comments available to summarize.";
    pub const APOLOGY: &'static str = "Unable to generate summary at this time.";

    pub fn ok(summary: impl Into<String>) -> Self {
        Self {
            success: true,
            error: None,
            summary: summary.into(),
        }
    }

    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            summary: Self::APOLOGY.to_string(),
        }
    }
}
