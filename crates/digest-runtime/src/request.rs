//! Request parsing for the stdin JSON contract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use digest_core::CommentSet;

/// `{"comments": [...]}` request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Strings and/or `{text, rating}` objects.
    #[serde(default)]
    pub comments: serde_json::Value,
}

impl SummaryRequest {
    pub fn into_comment_set(self) -> CommentSet {
        match self.comments {
            serde_json::Value::Array(values) => CommentSet::from_json_values(&values),
            serde_json::Value::Null => CommentSet::new(),
            single => CommentSet::from_json_values(&[single]),
        }
    }
}

/// Parse raw input into a comment set.
///
/// A JSON object is read as a [`SummaryRequest`]; a bare JSON array is taken
/// as the comment list. Anything else is plain text with one comment per line.
pub fn parse_request(raw: &str) -> CommentSet {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value @ serde_json::Value::Object(_)) => {
            match serde_json::from_value::<SummaryRequest>(value) {
                Ok(request) => request.into_comment_set(),
                Err(e) => {
                    debug!("Request object not understood ({}), reading lines", e);
                    CommentSet::from_texts(raw.lines())
                }
            }
        }
        Ok(serde_json::Value::Array(values)) => CommentSet::from_json_values(&values),
        Ok(_) => {
            debug!("Input is a JSON scalar, reading lines");
            CommentSet::from_texts(raw.lines())
        }
        Err(e) => {
            debug!("Input is not JSON ({}), reading lines", e);
            CommentSet::from_texts(raw.lines())
        }
    }
}
