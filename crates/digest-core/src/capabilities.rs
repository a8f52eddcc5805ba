//! Sentence segmenter capability levels.

use serde::{Deserialize, Serialize};

/// Which sentence segmenter the summarizer should run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// No segmenter: extractive scoring is skipped, every summary is composed.
    None,
    /// Punctuation splitting only, no linguistic annotations.
    Plain,
    /// Punctuation splitting plus entity and verb annotations.
    Annotated,
}

impl SegmenterKind {
    /// Whether sentences produced by this kind carry entity/verb annotations.
    pub fn supports_annotations(&self) -> bool {
        matches!(self, Self::Annotated)
    }
}

impl Default for SegmenterKind {
    fn default() -> Self {
        Self::Annotated
    }
}

impl std::fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Plain => write!(f, "plain"),
            Self::Annotated => write!(f, "annotated"),
        }
    }
}

impl std::str::FromStr for SegmenterKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "plain" | "punctuation" => Ok(Self::Plain),
            "annotated" | "enriched" => Ok(Self::Annotated),
            other => Err(crate::Error::Config(format!(
                "unknown segmenter '{}' (expected plain, annotated or none)",
                other
            ))),
        }
    }
}
