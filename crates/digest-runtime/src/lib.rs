//! Review Digest Runtime: strategy selection, composed summaries, request parsing.
//!
//! `Summarizer` tries extractive summarization first and downgrades to the
//! deterministic `SummaryComposer` whenever extraction cannot produce a
//! usable result. Neither path returns an error to the caller.

pub mod composer;
pub mod orchestrator;
pub mod request;

pub use composer::{Issue, Praise, SummaryComposer};
pub use orchestrator::{Strategy, Summarizer, SummaryOutcome};
pub use request::{parse_request, SummaryRequest};
